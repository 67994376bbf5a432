//! Shared run pipeline consumed by the binary.
//!
//! One traversal pass, one filter pass, one render pass, one dispatch pass;
//! strictly sequential, first error wins.

use std::env;
use std::io;

use crate::colors::Painter;
use crate::dispatch::{self, GoGenerate};
use crate::error::Error;
use crate::filter;
use crate::format;
use crate::queue::PathQueue;
use crate::types::RunConfig;
use crate::walk;

pub fn run(config: &RunConfig) -> Result<(), Error> {
    // Compile the filter first so a bad pattern aborts before any filesystem
    // work, printing, or dispatch.
    let pattern = filter::compile(config.run_pattern.as_deref())?;

    let pwd = env::current_dir().map_err(Error::Cwd)?;
    let mut queue = PathQueue::seeded(&config.roots);
    let directives = walk::collect(&pwd, &mut queue)?;
    let retained = filter::apply(directives, pattern.as_ref());

    let painter = Painter::new(config.color);
    let items = format::render(&pwd, retained, &painter);

    let mut generator = GoGenerate::new(config.program.as_str(), config.run_pattern.clone());
    let mut stdout = io::stdout().lock();
    dispatch::run_items(&items, config.list, &mut generator, &mut stdout)
}
