pub mod allele;
pub mod epitope;
pub mod health;
