use leptos::prelude::*;
use scatter_app::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting ACS Scatter Dashboard");

    mount_to_body(|| view! { <App /> });
}
