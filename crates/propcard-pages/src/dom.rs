//! Browser mounting.

use propcard_core::{IntoPage, MountError};

use crate::component::Component;
use crate::info_log;

/// Replaces the contents of the element with id `target_id` by the
/// rendered component.
pub fn mount_component<C: Component>(component: &C, target_id: &str) -> Result<(), MountError> {
	mount(component.render(), target_id)?;
	info_log!("mounted {} into #{}", C::name(), target_id);
	Ok(())
}

/// Replaces the contents of the element with id `target_id` by `view`.
pub fn mount(view: impl IntoPage, target_id: &str) -> Result<(), MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let target = document
		.get_element_by_id(target_id)
		.ok_or_else(|| MountError::TargetNotFound(target_id.to_string()))?;

	target.set_inner_html("");
	view.into_page().mount(&target)
}
