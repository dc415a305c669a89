pub(crate) mod dsl;
pub(crate) mod ease;
pub(crate) mod layer;
pub(crate) mod playback;
pub(crate) mod timeline;
