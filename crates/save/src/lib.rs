mod atomic_write;
pub mod bin_io;
pub mod file_header;
pub mod game_file;
pub mod record_codec;
pub mod save_error;
mod save_plugin;
pub mod undo_codec;


pub use game_file::{decode_game, encode_game, LoadedGame};
pub use save_error::SaveError;
pub use save_plugin::{
    load_from_file, save_to_file, LoadGameEvent, SaveGameEvent, SaveLoadOutcome, SavePlugin,
};
