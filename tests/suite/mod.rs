mod client;
mod lifecycle;
mod markdown;
mod ui_smoke;
