//! Entry point for the WASM application

pub fn main() {
    cardapio_frontend::start();
}
