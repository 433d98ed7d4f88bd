//! glyph2svg CLI
//!
//! Usage:
//!   glyph2svg info <FONT>
//!   glyph2svg char <FONT> <CHAR> [-o FILE] [--viewbox <metrics|bounds>] [style flags]
//!   glyph2svg text <FONT> <TEXT> [-o FILE] [--line-height <N>] [style flags]
//!   glyph2svg batch <FONT> [CHARS] -o DIR [--start HEX --end HEX] [style flags]
//!   glyph2svg chars <FONT> [--start HEX --end HEX]
//!
//! Style flags: --style <TOML>, --fill, --stroke, --stroke-width

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use glyph2svg::{
    FontAccess, FontFace, GlyphRenderer, GlyphStyle, RenderConfig, ViewboxPolicy,
};

#[derive(Parser)]
#[command(name = "glyph2svg")]
#[command(about = "Convert TrueType glyph outlines to standalone SVG documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print font metadata
    Info {
        /// Font file (TTF/OTF)
        font: PathBuf,
    },

    /// Render a single character
    Char {
        /// Font file (TTF/OTF)
        font: PathBuf,
        /// Character to render
        ch: char,
        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// ViewBox computation policy
        #[arg(long, value_enum, default_value = "metrics")]
        viewbox: ViewboxPolicy,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render a run of text (use \n in the argument for line breaks)
    Text {
        /// Font file (TTF/OTF)
        font: PathBuf,
        /// Text to render
        text: String,
        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Line-height multiplier
        #[arg(long, default_value_t = 1.2)]
        line_height: f64,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render characters to u<HEX>.svg files in a directory
    Batch {
        /// Font file (TTF/OTF)
        font: PathBuf,
        /// Characters to render; defaults to the font's supported
        /// characters in the --start/--end range
        chars: Option<String>,
        /// Output directory (created if missing)
        #[arg(short, long)]
        output: PathBuf,
        /// Range start as a hex code point
        #[arg(long, default_value = "4E00", value_parser = parse_hex)]
        start: u32,
        /// Range end as a hex code point
        #[arg(long, default_value = "9FA5", value_parser = parse_hex)]
        end: u32,
        /// ViewBox computation policy
        #[arg(long, value_enum, default_value = "metrics")]
        viewbox: ViewboxPolicy,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// List characters the font supports in a code point range
    Chars {
        /// Font file (TTF/OTF)
        font: PathBuf,
        /// Range start as a hex code point
        #[arg(long, default_value = "4E00", value_parser = parse_hex)]
        start: u32,
        /// Range end as a hex code point
        #[arg(long, default_value = "9FA5", value_parser = parse_hex)]
        end: u32,
    },
}

/// Style options shared by the render subcommands. A `--style` file is
/// loaded first; individual flags override its values.
#[derive(Args)]
struct StyleArgs {
    /// Style file (TOML: fill, stroke, stroke_width)
    #[arg(long)]
    style: Option<PathBuf>,
    /// Fill color (passed through verbatim)
    #[arg(long)]
    fill: Option<String>,
    /// Stroke color (passed through verbatim)
    #[arg(long)]
    stroke: Option<String>,
    /// Stroke width
    #[arg(long)]
    stroke_width: Option<f64>,
}

impl StyleArgs {
    fn resolve(&self) -> GlyphStyle {
        let mut style = match &self.style {
            Some(path) => match GlyphStyle::from_file(path) {
                Ok(style) => style,
                Err(e) => {
                    eprintln!("Error loading style '{}': {}", path.display(), e);
                    process::exit(1);
                }
            },
            None => GlyphStyle::default(),
        };
        if let Some(fill) = &self.fill {
            style.fill = fill.clone();
        }
        if let Some(stroke) = &self.stroke {
            style.stroke = stroke.clone();
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width;
        }
        style
    }
}

fn parse_hex(s: &str) -> Result<u32, String> {
    u32::from_str_radix(s.trim_start_matches("0x").trim_start_matches("U+"), 16)
        .map_err(|e| format!("invalid hex code point '{}': {}", s, e))
}

fn open_font(path: &PathBuf) -> FontFace {
    match FontFace::open(path) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error loading font '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Info { font } => {
            let font = open_font(&font);
            let meta = font.metadata();
            println!("family:     {}", font.family_name());
            println!("glyphs:     {}", meta.glyph_count);
            println!("ascent:     {}", meta.ascent);
            println!("descent:    {}", meta.descent);
            match meta.x_height {
                Some(v) => println!("x-height:   {}", v),
                None => println!("x-height:   unavailable"),
            }
            match meta.cap_height {
                Some(v) => println!("cap-height: {}", v),
                None => println!("cap-height: unavailable"),
            }
        }

        Command::Char {
            font,
            ch,
            output,
            viewbox,
            style,
        } => {
            let renderer = GlyphRenderer::new(open_font(&font)).with_config(
                RenderConfig::new()
                    .with_style(style.resolve())
                    .with_viewbox(viewbox),
            );
            let result = match &output {
                Some(path) => renderer.render_char_to(ch, path),
                None => renderer.render_char(ch),
            };
            match result {
                Ok(svg) => match output {
                    Some(path) => println!("'{}' -> {}", ch, path.display()),
                    None => println!("{}", svg),
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }

        Command::Text {
            font,
            text,
            output,
            line_height,
            style,
        } => {
            let renderer = GlyphRenderer::new(open_font(&font)).with_config(
                RenderConfig::new()
                    .with_style(style.resolve())
                    .with_line_height(line_height),
            );
            // Allow literal "\n" on the command line as a line break.
            let text = text.replace("\\n", "\n");
            let result = match &output {
                Some(path) => renderer.render_text_to(&text, path),
                None => Ok(renderer.render_text(&text)),
            };
            match result {
                Ok(rendered) => {
                    for (ch, reason) in &rendered.skipped {
                        eprintln!("Skipped '{}': {}", ch, reason);
                    }
                    match output {
                        Some(path) => println!("text -> {}", path.display()),
                        None => println!("{}", rendered.svg),
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }

        Command::Batch {
            font,
            chars,
            output,
            start,
            end,
            viewbox,
            style,
        } => {
            let font = open_font(&font);
            let chars: Vec<char> = match chars {
                Some(s) => s.chars().collect(),
                None => match font.supported_chars(start, end) {
                    Ok(chars) => chars,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                },
            };
            let renderer = GlyphRenderer::new(font).with_config(
                RenderConfig::new()
                    .with_style(style.resolve())
                    .with_viewbox(viewbox),
            );
            match renderer.batch_render(chars, &output) {
                Ok(report) => {
                    println!("converted: {}", report.success);
                    println!("failed:    {}", report.failures.len());
                    for (ch, reason) in &report.failures {
                        eprintln!("  '{}': {}", ch, reason);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }

        Command::Chars { font, start, end } => {
            let font = open_font(&font);
            match font.supported_chars(start, end) {
                Ok(chars) => {
                    for ch in chars {
                        println!("U+{:04X} {}", ch as u32, ch);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
