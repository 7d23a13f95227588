//! Trunk entry point. Mounts the application into `<body>` when built for
//! the browser; compiles to an empty binary otherwise.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("mounting portfolio app");
        leptos::mount::mount_to_body(portfolio::app::App);
    }
}
