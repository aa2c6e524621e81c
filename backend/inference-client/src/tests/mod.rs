mod credential;
mod env_file;
mod payload;
mod placeholder;
