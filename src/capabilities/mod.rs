mod store;

pub use self::store::{
    Store, StoreError, StoreOperation, StoreOutput, StoreResult, MAX_KEY_LENGTH, MAX_VALUE_SIZE,
};

pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

pub type AppRender = Render<Event>;
pub type AppStore = Store<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub store: Store<Event>,
}
