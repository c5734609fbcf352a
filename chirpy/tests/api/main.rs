mod admin;
mod chirps;
mod helpers;
mod refresh;
mod webhooks;
