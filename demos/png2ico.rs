//! Converts a PNG or JPEG image into a multi-resolution ICO file.
//!
//! ```shell
//! cargo run --example png2ico <path/to/logo.png>
//! # ICO will be saved to path/to/icon/logo.ico
//! ```
//!
//! Set `RUST_LOG=debug` to see each rendered size.

use clap::{App, Arg};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

//===========================================================================//

fn main() {
    env_logger::init();
    let matches = App::new("png2ico")
        .version("0.1")
        .about("Creates a multi-resolution ICO file from one image")
        .arg(
            Arg::with_name("output")
                .takes_value(true)
                .value_name("PATH")
                .short("o")
                .long("output")
                .help("Sets output path (default: icon/<name>.ico)"),
        )
        .arg(Arg::with_name("image").required(true))
        .get_matches();
    let image_path = PathBuf::from(matches.value_of("image").unwrap());
    let out_path = match matches.value_of("output") {
        Some(path) => PathBuf::from(path),
        None => icoconv::default_output_path(&image_path),
    };
    if let Err(error) = run(&image_path, &out_path) {
        eprintln!("Operation failed: {}", error);
        process::exit(1);
    }
}

fn run(image_path: &Path, out_path: &Path) -> icoconv::Result<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let source = icoconv::SourceImage::open(image_path)?;
    let mut icondir = icoconv::IconDir::new();
    for (size, payload) in icoconv::render_payloads(&source)? {
        icondir.add_entry(icoconv::IconDirEntry::new(size, payload));
    }
    let mut ico_bytes = Vec::new();
    icondir.write(&mut ico_bytes)?;
    icoconv::write_icon_file(out_path, &ico_bytes)?;
    println!("Icon file created: {}", out_path.display());
    for (entry, offset) in icondir.entries().iter().zip(icondir.offsets()) {
        let kind = if entry.is_png() { "PNG" } else { "BMP" };
        let pixels = entry.size().pixels();
        println!(
            "{:3}x{:<3} {} {:6} bytes at offset {}",
            pixels,
            pixels,
            kind,
            entry.payload().len(),
            offset
        );
    }
    Ok(())
}

//===========================================================================//
