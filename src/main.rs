//! Dialogue Pager CLI
//!
//! Pages a message through a dialogue box and prints each page as it would
//! appear on the tile plane, pressing confirm between pages.
//!
//!   dialogue-pager [--config PATH] [--json] [TEXT...]
//!
//! With no TEXT the message is read from stdin. Set `RUST_LOG` to see
//! pagination events on stderr.

use anyhow::{bail, Context, Result};
use dialogue_pager::{config, paginate, Buttons, DialogueBox, InputState, TileGrid, Viewport};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Args {
    config: Option<PathBuf>,
    json: bool,
    text: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        json: false,
        text: None,
    };
    let mut words = Vec::new();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--json" => args.json = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ => words.push(arg),
        }
    }
    if !words.is_empty() {
        args.text = Some(words.join(" "));
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let config = config::load_from(args.config).context("loading dialogue config")?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading message from stdin")?;
            buf
        }
    };

    if args.json {
        let viewport = Viewport::for_frame(config.frame.rect())?;
        let pages = paginate(&text, viewport);
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    let frame = config.frame.rect();
    let mut dialogue = DialogueBox::new(&config);
    dialogue.start(&text)?;

    let (end_x, end_y) = frame
        .extent()
        .context("dialogue frame runs past the tile plane")?;
    let mut grid = TileGrid::new(end_x, end_y);
    let mut input = InputState::new();
    let mut page = 0;
    while dialogue.is_active() {
        grid.clear();
        dialogue.render(&mut grid);
        println!("-- page {} --", page + 1);
        for y in frame.y..end_y {
            if let Some(row) = grid.row(y) {
                println!("{}", row.trim_end());
            }
        }

        input.update(Buttons::NONE);
        input.update(Buttons::A);
        dialogue.update(&input);
        page += 1;
    }
    Ok(())
}
