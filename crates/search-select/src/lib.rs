//! A searchable dropdown / autocomplete input for [`ratatui`].
//!
//! [`Autocomplete`] implements [`search_select_core::Component`], so it embeds
//! in any [`Model`] the same way other components do: route its messages,
//! map its commands, and include its subscriptions while it is on screen.
//!
//! ```toml
//! [dependencies]
//! search-select = "0.1"
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`autocomplete`] | The widget, its messages and rendering |
//! | [`config`] | [`AutocompleteConfig`] construction surface |
//! | [`filter`] | Case-insensitive substring filtering |
//! | [`input`] | Search field renderer and the custom-input hook |
//! | [`option`] | [`SelectOption`] and option identity |
//! | [`state`] | Per-instance interaction state |
//! | [`style`] | Default look and per-region overrides |
//! | [`text_edit`] | Single-line edit buffer |
//!
//! # Quick start
//!
//! ```ignore
//! use search_select::{Autocomplete, Command, Component, Model, SelectOption, Subscription};
//! use search_select::autocomplete::Message;
//! use ratatui::Frame;
//!
//! struct App { fruit: Autocomplete<u32> }
//!
//! enum Msg { Fruit(Message<u32>), Key(crossterm::event::KeyEvent) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut fruit = Autocomplete::new(vec![
//!             SelectOption::new(1, "Apple"),
//!             SelectOption::new(2, "Banana"),
//!         ]);
//!         fruit.focus();
//!         (App { fruit }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Key(key) => self.fruit.update(Message::KeyPress(key)).map(Msg::Fruit),
//!             Msg::Fruit(m) => self.fruit.update(m).map(Msg::Fruit),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         self.fruit.view(frame, frame.area());
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         let mut subs = vec![search_select::terminal_events(|e| e.key_press().map(Msg::Key))];
//!         subs.extend(self.fruit.subscriptions().into_iter().map(|s| s.map(Msg::Fruit)));
//!         subs
//!     }
//! }
//! ```

pub mod autocomplete;
pub mod config;
pub mod filter;
pub mod input;
pub mod option;
pub mod state;
pub mod style;
pub mod text_edit;

pub use autocomplete::Autocomplete;
pub use config::AutocompleteConfig;
pub use input::{DefaultInput, InputProps, InputRenderer};
pub use option::{OptionKey, SelectOption};
pub use style::{Declaration, Part, StyleOverrides};

pub use search_select_core::*;

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
