pub mod band;
pub mod events;
pub mod forms;
pub mod gallery;
pub mod media;
pub mod music;
pub mod releases;
pub mod settings;
pub mod tour;
