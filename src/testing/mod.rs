//! Test doubles and fixtures shared by unit tests.

mod fake_process;

pub use fake_process::FakeProcessRunner;

/// `settings.py` as generated by `django-admin startproject core`.
pub const DJANGO_SETTINGS: &str = include_str!("../../tests/fixtures/django_settings.py");
