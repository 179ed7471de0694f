use argh::FromArgs;
use image::{ImageFormat, RgbImage};
use lcp::{consts::LCP_MAGIC, Channels, LcpError};
use log::{debug, error, info};
use std::{fs::File, io::BufReader, path::Path, process::ExitCode};

/// LCP generator and viewer.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Generate(Generate),
    View(View),
    Info(Info),
}

/// Generates an LCP file from a PNG image.
#[derive(FromArgs)]
#[argh(subcommand, name = "generate")]
struct Generate {
    /// accept any image format the decoder recognizes, not just PNG
    #[argh(switch)]
    any_format: bool,

    /// the input image
    #[argh(positional)]
    input: String,
    /// the output file, must not exist yet
    #[argh(positional, default = "String::from(\"test.lcp\")")]
    output: String,
}

/// Decodes an LCP file and exports it as PNG for viewing.
#[derive(FromArgs)]
#[argh(subcommand, name = "view")]
struct View {
    /// expected magic number
    #[argh(option, default = "LCP_MAGIC")]
    magic: u16,

    /// the input LCP file
    #[argh(positional)]
    input: String,
    /// the output PNG file
    #[argh(positional)]
    output: String,
}

/// Prints the header of an LCP file.
#[derive(FromArgs)]
#[argh(subcommand, name = "info")]
struct Info {
    /// expected magic number
    #[argh(option, default = "LCP_MAGIC")]
    magic: u16,

    /// the input LCP file
    #[argh(positional)]
    input: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { command } = argh::from_env();

    let result = match command {
        Command::Generate(options) => generate(options),
        Command::View(options) => view(options),
        Command::Info(options) => info(options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(exit_code(e.as_ref()))
        }
    }
}

/// `10 + code` for container errors, `1` for everything else.
fn exit_code(e: &(dyn std::error::Error + 'static)) -> u8 {
    e.downcast_ref::<LcpError>()
        .map(|e| 10 + e.code())
        .unwrap_or(1)
}

fn load_image(path: &str, any_format: bool) -> Result<RgbImage, Box<dyn std::error::Error>> {
    let image = if any_format {
        image::io::Reader::open(path)?
            .with_guessed_format()?
            .decode()?
    } else {
        image::io::Reader::with_format(BufReader::new(File::open(path)?), ImageFormat::Png)
            .decode()?
    };

    Ok(image.into_rgb8())
}

fn generate(options: Generate) -> Result<(), Box<dyn std::error::Error>> {
    let Generate {
        any_format,
        input,
        output,
    } = options;

    if Path::new(&output).exists() {
        return Err(Box::new(LcpError::AlreadyExists));
    }

    let image = load_image(&input, any_format)?;
    let (width, height) = image.dimensions();

    info!("Encoding {width}x{height} image from `{input}`");

    let (Ok(width), Ok(height)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err("image dimensions are too large".into());
    };

    lcp::encode::save(&output, width, height, Channels::Rgb, image.as_raw())?;

    let len = lcp::container_len(width, height).unwrap_or_default();
    println!("Written {len} bytes to `{output}`");

    Ok(())
}

fn view(options: View) -> Result<(), Box<dyn std::error::Error>> {
    let View {
        magic,
        input,
        output,
    } = options;

    debug!("Decoding `{input}` expecting magic {magic:#06x}");

    let image = lcp::decode::open(&input, magic)?;
    let (width, height) = (image.width(), image.height());

    RgbImage::from_vec(u32::from(width), u32::from(height), image.into_pixels())
        .ok_or("failed to create image")?
        .save_with_format(&output, ImageFormat::Png)?;

    println!("Written {width}x{height} image to `{output}`");

    Ok(())
}

fn info(options: Info) -> Result<(), Box<dyn std::error::Error>> {
    let Info { magic, input } = options;

    let data = lcp::decode::read_file(&input)?;
    let header = lcp::decode::read_header(&data)?;
    let needed = lcp::container_len(header.width, header.height).unwrap_or(usize::MAX);

    println!("file:      {input}");
    println!("magic:     {:#06x} ({})", header.magic, header.magic);
    println!("size:      {}x{}", header.width, header.height);
    println!("payload:   {} bytes", needed.saturating_sub(lcp::consts::HEADER_LEN));
    println!("trailing:  {} bytes", data.len().saturating_sub(needed));

    lcp::decode::parse(&data, magic)?;
    println!("status:    ok");

    Ok(())
}
