use crate::config::{CodecKind, PipelineConfig};
use crate::container::{self, Container};
use crate::error::LzhError;
use crate::pipeline::{self, StageStats};
use crate::sample;
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Compression demo of LZW and Huffman coding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compresses and decompresses input, checking that nothing changed
    Roundtrip {
        /// Codec to apply; repeat to chain, e.g. -c lzw -c huffman -c lzw
        #[arg(short, long = "codec", value_name = "CODEC", required = true)]
        codecs: Vec<CodecKind>,

        /// Input file (default: built-in sample text)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Show a progress bar per stage
        #[arg(short, long)]
        progress: bool,
    },
    /// Compresses a file
    Compress {
        /// Input file to compress
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Codec to apply; repeat to chain [lzw, huffman]
        #[arg(short, long = "codec", value_name = "CODEC", default_value = "lzw")]
        codecs: Vec<CodecKind>,
    },
    /// Decompresses a file
    Decompress {
        /// Input file to decompress
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

pub fn run() -> Result<(), LzhError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Roundtrip { codecs, input, progress } => {
            let data = match &input {
                Some(path) => {
                    println!("Using '{}' as input data.", path.display());
                    fs::read(path)?
                }
                None => {
                    println!("Using test dataset");
                    sample::sample_bytes().to_vec()
                }
            };

            let chain: Vec<String> = codecs.iter().map(|c| c.to_string()).collect();
            println!("{}", chain.join(" - "));

            let config = PipelineConfig::default().with_codecs(codecs).with_progress(progress);
            let report = pipeline::roundtrip(&data, &config)?;

            println!("Compressing:");
            print_stages(data.len(), &report.compression.stages, '+');
            println!("Decompressing:");
            print_stages(report.compression.compressed_size as usize, &report.decompression, '-');
            println!("  Ratio:            {:.2}x", report.compression.ratio);

            if let Some(offset) = report.mismatch {
                return Err(LzhError::DecodeError(format!(
                    "Input and output differ at position {} ({} vs {} bytes)",
                    offset,
                    data.len(),
                    report.restored_size
                )));
            }
            println!("Input equal output: Success!");
        }
        Commands::Compress { input, output, codecs } => {
            println!("Compressing {} to {}...", input.display(), output.display());
            let data = fs::read(&input)?;
            let config = PipelineConfig::default().with_codecs(codecs);

            let start = Instant::now();
            let (payload, stats) = pipeline::compress(&data, &config)?;
            let container = Container::new(config.codecs, &data, payload);

            let mut out_file = BufWriter::new(File::create(&output)?);
            let written = container::write_container(&mut out_file, &container)?;
            out_file.flush()?;
            let duration = start.elapsed();

            println!("Compression successful!");
            println!("  Original Size:    {} bytes", stats.original_size);
            println!("  Compressed Size:  {} bytes", written);
            println!("  Ratio:            {:.2}x", stats.ratio);
            println!("  Elapsed Time:     {:.2?}", duration);
        }
        Commands::Decompress { input, output } => {
            println!("Decompressing {} to {}...", input.display(), output.display());

            let start = Instant::now();
            let mut in_file = BufReader::new(File::open(&input)?);
            let container = container::read_container(&mut in_file)?;

            let config = PipelineConfig::default().with_codecs(container.codecs.clone());
            let (restored, _stages) = pipeline::decompress(&container.payload, &config)?;
            container.verify(&restored)?;
            fs::write(&output, &restored)?;
            let duration = start.elapsed();

            println!("Decompression successful!");
            println!("  Restored Size: {} bytes", restored.len());
            println!("  Elapsed Time:  {:.2?}", duration);
        }
    }

    Ok(())
}

fn print_stages(input_size: usize, stages: &[StageStats], sign: char) {
    println!("Input: {} bytes", input_size);
    for stage in stages {
        println!(" {}{}: {} bytes", sign, stage.codec, stage.output_size);
    }
}
