//! App Root Component
//!
//! Main application component with routing and global providers, plus the
//! helpers that carry list names through route segments.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{AddProduct, ListDetail, Lists, Login, Register};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/list" /> } />
                        <Route path="/login" view=Login />
                        <Route path="/register" view=Register />
                        <Route path="/list" view=Lists />
                        <Route path="/list/:name" view=ListDetail />
                        <Route path="/list/:name/addproduct" view=AddProduct />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/list"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to your lists"
            </A>
        </div>
    }
}

// ============ Route Helpers ============

/// Route to a list's detail screen; the name is percent-encoded into the
/// path segment.
pub fn list_route(name: &str) -> String {
    format!("/list/{}", urlencoding::encode(name))
}

/// Route to a list's add-product screen.
pub fn add_product_route(name: &str) -> String {
    format!("/list/{}/addproduct", urlencoding::encode(name))
}

/// Decode a route segment back into the list name. A segment that is not
/// valid percent-encoding is used as-is.
pub fn decode_route_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_name_survives_the_route_round_trip() {
        let name = "牛奶清單 50% off";
        let route = list_route(name);
        let segment = route.strip_prefix("/list/").unwrap();
        assert!(!segment.contains(' '));
        assert!(!segment.contains('牛'));
        assert_eq!(decode_route_segment(segment), name);
    }

    #[test]
    fn add_product_route_nests_under_the_list() {
        assert_eq!(add_product_route("pantry"), "/list/pantry/addproduct");
        assert_eq!(
            add_product_route("spring cleaning"),
            "/list/spring%20cleaning/addproduct"
        );
    }

    #[test]
    fn undecodable_segments_fall_back_to_the_raw_text() {
        assert_eq!(decode_route_segment("%FF"), "%FF");
        assert_eq!(decode_route_segment("plain"), "plain");
    }
}
