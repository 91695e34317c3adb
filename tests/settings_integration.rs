// SPDX-License-Identifier: MPL-2.0
//! Filesystem adapters wired to the carousel orchestrator.

use iced::{Point, Rectangle, Size};
use iced_carousel::application::port::{ImageSource, SettingsStore};
use iced_carousel::domain::{CarouselSettings, RotationSpeed, TransitionKind};
use iced_carousel::error::Error;
use iced_carousel::infrastructure::{FileSettingsStore, FsImageSource};
use iced_carousel::ui::carousel::CarouselOrchestrator;
use iced_carousel::ui::layout::WindowHost;
use image_rs::RgbImage;
use std::path::Path;
use std::time::Instant;
use tempfile::tempdir;

#[derive(Debug, Default)]
struct NullHost;

impl WindowHost for NullHost {
    fn is_fullscreen(&self) -> bool {
        false
    }
    fn is_maximized(&self) -> bool {
        false
    }
    fn visual_bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1280.0, 800.0))
    }
    fn set_fullscreen(&mut self, _fullscreen: bool) {}
    fn set_maximized(&mut self, _maximized: bool) {}
    fn resize(&mut self, _size: Size) {}
    fn move_to(&mut self, _position: Point) {}
}

fn write_png(path: &Path, width: u32, height: u32) {
    RgbImage::new(width, height).save(path).expect("write png");
}

#[test]
fn settings_survive_reopening_the_store() {
    let config = tempdir().expect("config dir");
    let data = tempdir().expect("data dir");
    let settings = CarouselSettings {
        rotation_speed: RotationSpeed::new(7),
        transition: TransitionKind::SlideRight,
    };

    {
        let (mut store, warnings) = FileSettingsStore::open_with_overrides(
            Some(config.path().to_path_buf()),
            Some(data.path().to_path_buf()),
        );
        assert!(warnings.is_empty());
        store.save_settings(settings).expect("save settings");
        store
            .save_last_directory(Path::new("/srv/photos"))
            .expect("save directory");
    }

    let (store, warnings) = FileSettingsStore::open_with_overrides(
        Some(config.path().to_path_buf()),
        Some(data.path().to_path_buf()),
    );
    assert!(warnings.is_empty());
    assert_eq!(store.load_settings(), settings);
    assert_eq!(
        store.load_last_directory().as_deref(),
        Some(Path::new("/srv/photos"))
    );
}

#[test]
fn generated_directory_feeds_the_carousel() {
    let pictures = tempdir().expect("pictures dir");
    write_png(&pictures.path().join("b.png"), 40, 30);
    write_png(&pictures.path().join("a.png"), 20, 10);
    std::fs::write(pictures.path().join("notes.txt"), "not an image").expect("write txt");
    std::fs::write(pictures.path().join("broken.jpg"), b"garbage").expect("write jpg");

    let config = tempdir().expect("config dir");
    let data = tempdir().expect("data dir");
    let (mut store, _) = FileSettingsStore::open_with_overrides(
        Some(config.path().to_path_buf()),
        Some(data.path().to_path_buf()),
    );
    let mut carousel = CarouselOrchestrator::default();
    let mut host = NullHost;
    let now = Instant::now();

    let count = carousel
        .open_directory(
            pictures.path(),
            &FsImageSource::new(),
            &mut store,
            now,
            &mut host,
        )
        .expect("load pictures");

    assert_eq!(count, 2);
    let names: Vec<_> = carousel
        .navigation()
        .images()
        .iter()
        .map(|asset| asset.name().to_owned())
        .collect();
    assert_eq!(names, ["a.png", "b.png"]);
    assert_eq!(carousel.status().image_info(), Some("a.png - 20x10 - 1/2"));
    assert_eq!(
        store.load_last_directory().as_deref(),
        Some(pictures.path())
    );
}

#[test]
fn missing_directory_is_a_load_failure() {
    let root = tempdir().expect("root");
    let missing = root.path().join("gone");

    let err = FsImageSource::new().load(&missing).expect_err("missing dir");

    assert!(matches!(err, Error::DirectoryLoadFailure { .. }));
    assert!(err.is_directory_error());
}
