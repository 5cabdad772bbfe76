use criterion::{Criterion, black_box, criterion_group, criterion_main};

use blogmark::{html_to_markdown, markdown_to_html, preview};

fn sample_post(paragraphs: usize) -> String {
    let mut post = String::from("# Benchmark Post\n\n");
    for i in 0..paragraphs {
        post.push_str(&format!(
            "## Section {i}\n\nSome **bold** and *italic* text with a \
             [link](https://example.com/{i}) and `inline code`.\n\n\
             1. first step\n- a sub-bullet\n2. second step\n\n\
             | col a | col b |\n|-------|-------|\n| {i} | {i} |\n\n\
             ```\nlet value = {i};\n```\n\n"
        ));
    }
    post
}

fn bench_markdown_to_html(c: &mut Criterion) {
    let small = sample_post(5);
    let large = sample_post(100);

    c.bench_function("markdown_to_html/small", |b| {
        b.iter(|| markdown_to_html(black_box(&small)))
    });
    c.bench_function("markdown_to_html/large", |b| {
        b.iter(|| markdown_to_html(black_box(&large)))
    });
}

fn bench_html_to_markdown(c: &mut Criterion) {
    let html = markdown_to_html(&sample_post(100));

    c.bench_function("html_to_markdown/large", |b| {
        b.iter(|| html_to_markdown(black_box(&html)))
    });
}

fn bench_preview(c: &mut Criterion) {
    let post = sample_post(100);

    c.bench_function("preview/large", |b| b.iter(|| preview(black_box(&post), 20)));
}

criterion_group!(
    benches,
    bench_markdown_to_html,
    bench_html_to_markdown,
    bench_preview
);
criterion_main!(benches);
