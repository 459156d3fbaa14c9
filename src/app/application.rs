//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px, size,
};
use tracing::{error, info, warn};

use crate::app::layout::RootLayout;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::features::home::page::HomePage;
use crate::states::{GalleryPreferences, save_window_size};

actions!(avicure_gallery, [Quit]);

/// Run the Avicure Gallery application
pub fn run_app(prefs: GalleryPreferences) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| {
            remember_window_size(cx);
            cx.quit();
        });
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        gpui_component::init(cx);

        // Fonts and metadata, once, before the first window
        RootLayout::init(&prefs, cx);
        let title = cx.global::<RootLayout>().title();

        let (width, height) = prefs.window_size();
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        let page_prefs = prefs.clone();
        match cx.open_window(window_options, move |window, cx| {
            cx.new(|cx| HomePage::new(page_prefs, window, cx))
        }) {
            Ok(_) => info!(width, height, "Gallery window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open gallery window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}

/// Store the size of the open window so the next launch reuses it
fn remember_window_size(cx: &mut App) {
    let Some(handle) = cx.windows().into_iter().next() else {
        return;
    };
    let Ok(bounds) = handle.update(cx, |_, window, _| window.bounds()) else {
        return;
    };

    let (width, height) = (f32::from(bounds.size.width), f32::from(bounds.size.height));
    if let Err(e) = save_window_size(width, height) {
        warn!(error = %e, "Failed to save window size");
    }
}
