//! VitalTrack Dashboard
//!
//! Personal health tracking front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password authentication with session persistence
//! - Medication tracking with daily taken/pending status
//! - Vitals logging (blood pressure, heart rate, glucose, weight)
//! - Revocable doctor-access share links
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence and authentication are delegated to a hosted
//! backend service reached over HTTPS; nothing is stored locally except the
//! auth session and connection settings.

use leptos::*;

mod api;
mod app;
mod components;
mod models;
mod pages;
mod state;
mod token;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
