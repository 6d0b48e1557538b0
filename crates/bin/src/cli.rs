//! CLI argument definitions for the anyvalue binary.

use std::path::PathBuf;

use anyvalue::{
    Codec,
    strategy::{
        BytesDecodingStrategy, BytesEncodingStrategy, DateDecodingStrategy, DateEncodingStrategy,
    },
};
use clap::{Parser, Subcommand, ValueEnum};

/// How text tokens are recognized as timestamps
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateDecoding {
    /// Never; timestamps stay text (default)
    Deferred,
    /// ISO-8601 with milliseconds, e.g. 2019-09-26T07:58:30.996+02:00
    #[value(name = "iso8601-millis")]
    Iso8601Millis,
    /// Seconds since the Unix epoch
    Seconds,
    /// Milliseconds since the Unix epoch
    Milliseconds,
}

impl From<DateDecoding> for DateDecodingStrategy {
    fn from(decoding: DateDecoding) -> Self {
        match decoding {
            DateDecoding::Deferred => DateDecodingStrategy::deferred(),
            DateDecoding::Iso8601Millis => DateDecodingStrategy::iso8601_millis(),
            DateDecoding::Seconds => DateDecodingStrategy::seconds_since_1970(),
            DateDecoding::Milliseconds => DateDecodingStrategy::milliseconds_since_1970(),
        }
    }
}

/// How timestamps are written
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateEncoding {
    /// ISO-8601 with milliseconds (default)
    #[value(name = "iso8601-millis")]
    Iso8601Millis,
    /// Fractional seconds since the Unix epoch
    Seconds,
    /// Whole milliseconds since the Unix epoch
    Milliseconds,
}

impl From<DateEncoding> for DateEncodingStrategy {
    fn from(encoding: DateEncoding) -> Self {
        match encoding {
            DateEncoding::Iso8601Millis => DateEncodingStrategy::Iso8601Millis,
            DateEncoding::Seconds => DateEncodingStrategy::SecondsSince1970,
            DateEncoding::Milliseconds => DateEncodingStrategy::MillisecondsSince1970,
        }
    }
}

/// How byte blobs are written; JSON has no native bytes token
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BytesEncoding {
    /// Standard padded base64 (default)
    Base64,
    /// Lowercase hex
    Hex,
    /// Lowercase hex with a 0x prefix
    PrefixedHex,
}

impl From<BytesEncoding> for BytesEncodingStrategy {
    fn from(encoding: BytesEncoding) -> Self {
        match encoding {
            BytesEncoding::Base64 => BytesEncodingStrategy::Base64,
            BytesEncoding::Hex => BytesEncodingStrategy::Hex,
            BytesEncoding::PrefixedHex => BytesEncodingStrategy::PrefixedHex,
        }
    }
}

/// How text is turned into bytes by the bytes command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BytesDecoding {
    /// Standard padded base64 (default)
    Base64,
    /// Hex, with or without a 0x prefix
    Hex,
}

impl From<BytesDecoding> for BytesDecodingStrategy {
    fn from(decoding: BytesDecoding) -> Self {
        match decoding {
            BytesDecoding::Base64 => BytesDecodingStrategy::base64(),
            BytesDecoding::Hex => BytesDecodingStrategy::hex(),
        }
    }
}

/// Inspect and edit JSON documents as dynamic values
#[derive(Parser, Debug)]
#[command(name = "anyvalue")]
#[command(about = "anyvalue: inspect and edit JSON documents through key paths")]
#[command(version)]
pub struct Cli {
    /// JSON document to read; stdin when omitted
    #[arg(short, long, global = true, env = "ANYVALUE_INPUT")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Strategies shared by every subcommand
#[derive(clap::Args, Debug)]
pub struct CodecArgs {
    /// How text is recognized as timestamps while reading
    #[arg(long, global = true, default_value = "deferred", env = "ANYVALUE_DATE_DECODING")]
    pub date_decoding: DateDecoding,

    /// How timestamps are written
    #[arg(long, global = true, default_value = "iso8601-millis", env = "ANYVALUE_DATE_ENCODING")]
    pub date_encoding: DateEncoding,

    /// How byte blobs are written
    #[arg(long, global = true, default_value = "base64", env = "ANYVALUE_BYTES_ENCODING")]
    pub bytes_encoding: BytesEncoding,
}

impl CodecArgs {
    /// Builds the codec these options describe
    pub fn codec(&self) -> Codec {
        Codec::new()
            .with_date_decoding(self.date_decoding.into())
            .with_date_encoding(self.date_encoding.into())
            .with_bytes_encoding(self.bytes_encoding.into())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a key path as JSON
    Get(GetArgs),
    /// Write a JSON value at a key path and print the document
    Set(SetArgs),
    /// Re-encode the document with the configured strategies
    Fmt(FmtArgs),
    /// Decode a text or bytes value into bytes and print them as hex
    Bytes(BytesArgs),
    /// Print the debug rendering of the document or of a key path
    Show(ShowArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dot-delimited key path, e.g. users.0.name
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dot-delimited key path; missing maps along the way are created
    pub path: String,

    /// JSON text of the value to write; `null` deletes
    pub value: String,

    /// Pretty-print the resulting document
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the fmt command
#[derive(clap::Args, Debug)]
pub struct FmtArgs {
    /// Pretty-print the document
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the bytes command
#[derive(clap::Args, Debug)]
pub struct BytesArgs {
    /// Dot-delimited key path of the value to decode
    pub path: String,

    /// How text values are decoded
    #[arg(long, default_value = "base64")]
    pub decoding: BytesDecoding,
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Dot-delimited key path; the whole document when omitted
    pub path: Option<String>,
}
