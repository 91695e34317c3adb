// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame and per-keypress hot paths.
//!
//! Measures:
//! - Navigation through a large sequence (next/previous/select)
//! - Pivot zoom and panning
//! - A full orchestrated image change including the transition hand-over

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size, Vector};
use iced_carousel::application::NavigationState;
use iced_carousel::domain::ImageAsset;
use iced_carousel::ui::carousel::CarouselOrchestrator;
use iced_carousel::ui::layout::WindowHost;
use iced_carousel::ui::state::ZoomPanEngine;
use std::hint::black_box;
use std::time::{Duration, Instant};

fn images(count: usize) -> Vec<ImageAsset> {
    (0..count)
        .map(|i| ImageAsset::new(format!("image_{i:05}.png"), 1920, 1080))
        .collect()
}

/// Window that accepts every request and does nothing.
struct NullHost;

impl WindowHost for NullHost {
    fn is_fullscreen(&self) -> bool {
        false
    }
    fn is_maximized(&self) -> bool {
        false
    }
    fn visual_bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(2560.0, 1440.0))
    }
    fn set_fullscreen(&mut self, _fullscreen: bool) {}
    fn set_maximized(&mut self, _maximized: bool) {}
    fn resize(&mut self, _size: Size) {}
    fn move_to(&mut self, _position: Point) {}
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let mut state = NavigationState::with_images(images(10_000));

    group.bench_function("next", |b| b.iter(|| black_box(state.next())));
    group.bench_function("previous", |b| b.iter(|| black_box(state.previous())));
    group.bench_function("select_index", |b| {
        b.iter(|| black_box(state.select_index(black_box(4_321))))
    });

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom");
    let mut engine = ZoomPanEngine::default();
    engine.set_image(Some(Size::new(1920.0, 1080.0)));
    engine.set_viewport_size(Size::new(1280.0, 720.0));

    group.bench_function("zoom_in_out_at_pivot", |b| {
        b.iter(|| {
            engine.zoom_in(black_box(Point::new(300.0, 200.0)));
            engine.zoom_out(black_box(Point::new(300.0, 200.0)));
        })
    });

    engine.zoom(2.0, Point::new(640.0, 360.0));
    group.bench_function("pan", |b| {
        b.iter(|| black_box(engine.pan(black_box(Vector::new(3.0, -2.0)))))
    });

    group.finish();
}

fn bench_orchestrated_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");
    let mut carousel = CarouselOrchestrator::default();
    let mut host = NullHost;
    let mut store = iced_carousel::infrastructure::MemorySettingsStore::new();
    let start = Instant::now();
    let _ = carousel.apply_loaded(
        std::path::Path::new("/bench"),
        Ok(images(500)),
        &mut store,
        start,
        &mut host,
    );

    let mut now = start;
    group.bench_function("request_next_and_tick", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            carousel.request_next(now, &mut host);
            black_box(carousel.tick(now + Duration::from_millis(250), &mut host));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_navigation, bench_zoom, bench_orchestrated_change);
criterion_main!(benches);
