//! Larder
//!
//! Browser client for a list/product management backend, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Account registration and login (passwords are digested client-side)
//! - Named lists with per-list product items (barcode, expiry, description)
//! - Bearer-token sessions held in browser local storage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every screen follows the same cycle: collect form fields,
//! issue one HTTP call to the backend, branch on the normalized result,
//! update local view state. All business rules and persistence live in the
//! backend; this binary is presentation and request orchestration only.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod model;
mod pages;
mod state;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
