use chalk_core::{IndentDirection, SelectionRange, auto_indent, indent};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        out.push_str(&format!("    {i:06} <p>the quick brown fox</p>\n"));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_block_indent_whole_document(c: &mut Criterion) {
    let text = large_text(5_000);
    let selection = SelectionRange::new(0, text.chars().count());
    c.bench_function("block_indent/5k_lines", |b| {
        b.iter(|| {
            let edit = indent(
                black_box(&text),
                selection,
                "    ",
                IndentDirection::Indent,
            );
            black_box(edit.selection);
        })
    });
}

fn bench_block_outdent_middle(c: &mut Criterion) {
    let text = large_text(5_000);
    let len = text.chars().count();
    let selection = SelectionRange::new(len / 3, 2 * len / 3);
    c.bench_function("block_outdent/middle_third", |b| {
        b.iter(|| {
            let edit = indent(
                black_box(&text),
                selection,
                "    ",
                IndentDirection::Outdent,
            );
            black_box(edit.selection);
        })
    });
}

fn bench_auto_indent_at_end(c: &mut Criterion) {
    let text = large_text(5_000);
    let caret = SelectionRange::caret(text.chars().count());
    c.bench_function("auto_indent/end_of_document", |b| {
        b.iter(|| black_box(auto_indent(black_box(&text), caret).is_handled()))
    });
}

criterion_group!(
    benches,
    bench_block_indent_whole_document,
    bench_block_outdent_middle,
    bench_auto_indent_at_end
);
criterion_main!(benches);
