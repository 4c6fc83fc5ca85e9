#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod content;
mod error;
mod logging;
mod navigation;
mod pointer;
mod scroll;
mod visibility;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod icons;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This site renders in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
