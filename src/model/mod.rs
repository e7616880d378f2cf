pub mod api;
pub mod discord;
pub mod settings;

#[cfg(test)]
mod test;
