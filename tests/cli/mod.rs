mod errors;
mod listing;
mod logging;
mod run;
mod support;
