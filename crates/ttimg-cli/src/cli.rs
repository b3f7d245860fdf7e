//! CLI argument definitions using Clap v4

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// text-to-img - Render a line of text into a tightly cropped image
#[derive(Parser, Debug)]
#[command(name = "text-to-img")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Text to render
    #[arg(
        required_unless_present = "list_fonts",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub text: Option<String>,

    // Font options
    /// Font size in pixels, a whole number greater than 0
    #[arg(
        short = 's',
        long = "font-size",
        default_value = "100",
        allow_negative_numbers = true,
        help_heading = "Font options"
    )]
    pub font_size: String,

    /// Installed font name, font file name, or path to a font file
    #[arg(
        short = 'f',
        long = "font-name",
        default_value = "arial.ttf",
        help_heading = "Font options"
    )]
    pub font_name: String,

    /// Text color: "r,g,b", "r,g,b,a", "#RRGGBB", "#RRGGBBAA" or a color name
    #[arg(
        short = 'c',
        long = "font-color",
        default_value = "255,255,255",
        help_heading = "Font options"
    )]
    pub font_color: String,

    /// List the names of installed fonts and exit
    #[arg(long = "list-fonts", help_heading = "Font options")]
    pub list_fonts: bool,

    // Image options
    /// Background color, same syntax as --font-color
    #[arg(
        short = 'b',
        long = "background-color",
        default_value = "0,0,0,0",
        help_heading = "Image options"
    )]
    pub background_color: String,

    // File Options
    /// Image format, chosen by file extension
    #[arg(
        short = 'e',
        long = "file-extension",
        default_value = "png",
        help_heading = "File Options"
    )]
    pub file_extension: String,

    /// Existing folder to write the image into
    #[arg(
        short = 'o',
        long = "output-path",
        default_value = ".",
        help_heading = "File Options"
    )]
    pub output_path: String,

    /// File name without extension (derived from the text if omitted)
    #[arg(short = 'n', long = "file-name", help_heading = "File Options")]
    pub file_name: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
