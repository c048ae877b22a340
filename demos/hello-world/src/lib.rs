use wasm_bindgen::prelude::*;

mod game;
use game::HelloWorld;

flatland_web::export_game!(HelloWorld, "hello-world");
