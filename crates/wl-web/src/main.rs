use wl_web::app_root::app_root;

fn main() {
    // Initialize platform-specific logging
    wl_web::app::logging::init();
    dioxus::launch(app_root);
}
