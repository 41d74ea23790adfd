//! Adapter benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use term_adapter::core::ScreenBuffer;
use term_adapter::{dispatch_all, Action, Terminal, TerminalApi};

fn terminal() -> Terminal<ScreenBuffer> {
    let buffer = ScreenBuffer::new(80, 24);
    let viewport = buffer.full_viewport();
    Terminal::new(buffer, viewport)
}

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter");
    let text = "Hello, World! ".repeat(100);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("print_string", |b| {
        b.iter(|| {
            let mut term = terminal();
            term.print_string(black_box(&text)).unwrap();
            black_box(term)
        })
    });

    group.bench_function("execute_char", |b| {
        b.iter(|| {
            let mut term = terminal();
            for ch in text.chars() {
                term.execute_char(black_box(ch)).unwrap();
            }
            black_box(term)
        })
    });

    group.finish();
}

fn bench_sgr_and_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter");

    // Colored prompt redraw: move, style, print, erase the rest of the line
    let mut actions = Vec::new();
    for row in 0..24 {
        actions.push(Action::SetCursorPosition { x: 0, y: row });
        actions.push(Action::SetForegroundIndex { index: 2 });
        actions.push(Action::BoldText { on: true });
        actions.push(Action::PrintString {
            text: "user@host".into(),
        });
        actions.push(Action::SetTextToDefaults {
            foreground: true,
            background: true,
        });
        actions.push(Action::BoldText { on: false });
        actions.push(Action::EraseCharacters { count: 80 });
    }

    group.bench_function("redraw_lines", |b| {
        b.iter(|| {
            let mut term = terminal();
            dispatch_all(&mut term, black_box(&actions)).unwrap();
            black_box(term)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_print, bench_sgr_and_erase);
criterion_main!(benches);
