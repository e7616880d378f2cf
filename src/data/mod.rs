pub mod membership;
pub mod settings;
pub mod store;

#[cfg(test)]
mod test;
