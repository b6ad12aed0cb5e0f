//! Browser entry point.

use std::sync::Arc;

use propcard_pages::{BrowserAlert, error_log};
use wasm_bindgen::prelude::*;

use crate::home::HomePage;
use crate::settings::PageSettings;

/// Mounts the home page into `#app` once the module is loaded.
#[wasm_bindgen(start)]
pub fn launch() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let home = HomePage::new(PageSettings::default(), Arc::new(BrowserAlert));
	if let Err(e) = propcard_pages::dom::mount_component(&home, crate::MOUNT_ID) {
		error_log!("failed to mount home page: {}", e);
	}
}
