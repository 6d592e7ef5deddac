use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lzhuff::config::{CodecKind, PipelineConfig};
use lzhuff::{pipeline, sample};

fn bench_codecs(c: &mut Criterion) {
	let data = sample::sample_bytes().repeat(64);
	let mut group = c.benchmark_group("codecs");
	group.throughput(Throughput::Bytes(data.len() as u64));

	group.bench_function("lzw_compress", |b| b.iter(|| lzhuff::lzw_compress(&data)));
	group.bench_function("huffman_compress", |b| b.iter(|| lzhuff::huffman_compress(&data).unwrap()));

	let lzw = lzhuff::lzw_compress(&data);
	group.bench_function("lzw_decompress", |b| b.iter(|| lzhuff::lzw_decompress(&lzw).unwrap()));
	let huffman = lzhuff::huffman_compress(&data).unwrap();
	group.bench_function("huffman_decompress", |b| b.iter(|| lzhuff::huffman_decompress(&huffman).unwrap()));
	group.finish();
}

fn bench_chain(c: &mut Criterion) {
	let data = sample::sample_bytes().repeat(64);
	let config = PipelineConfig::default().with_codecs(vec![CodecKind::Lzw, CodecKind::Huffman]);
	let mut group = c.benchmark_group("pipeline");
	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("lzw_huffman_roundtrip", |b| {
		b.iter(|| {
			let report = pipeline::roundtrip(&data, &config).unwrap();
			assert!(report.is_success());
		});
	});
	group.finish();
}

criterion_group!(benches, bench_codecs, bench_chain);
criterion_main!(benches);
