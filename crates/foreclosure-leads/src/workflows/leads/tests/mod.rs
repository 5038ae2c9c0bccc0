mod common;
mod docket;
mod pipeline;
mod routing;
