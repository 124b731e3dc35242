use criterion::{Criterion, criterion_group, criterion_main};
use tmscan::{Engine, EngineOptions, PatternCache};

// From the JavaScript TextMate grammar
const PATTERNS: &[&str] = &[
    r"(?<![$_[:alnum:]])(?:(?<=\.\.\.)|(?<!\.))abstract|declare|override|public|protected|private|readonly|static(?![$_[:alnum:]])(?:(?=\.\.\.)|(?!\.))",
    r"(?:(?<![$_[:alnum:]])(?:(?<=\.\.\.)|(?<!\.))\b(async)\s+)?([$_[:alpha:]][$_[:alnum:]]*)\s*(?==>)",
    r"(?<![$_[:alnum:]])(?:(?<=\.\.\.)|(?<!\.))async(?![$_[:alnum:]])(?:(?=\.\.\.)|(?!\.))",
    r"(?<![$_[:alnum:]])(?:(?<=\.\.\.)|(?<!\.))true(?![$_[:alnum:]])(?:(?=\.\.\.)|(?!\.))",
    r"(?<![$_[:alnum:]])(?:(?<=\.\.\.)|(?<!\.))false(?![$_[:alnum:]])(?:(?=\.\.\.)|(?!\.))",
    r"(^|\G)\s*(\*)(?!/)",
    r"([$_[:alpha:]][$_[:alnum:]]*)\s*(?:(\.)|(\?\.(?!\s*\d)))(?=\s*[$_[:alpha:]][$_[:alnum:]]*(\s*\??\.\s*[$_[:alpha:]][$_[:alnum:]]*)*\s*)",
    r"(?<![$_[:alnum:]])(?:(?<=\.\.\.)|(?<!\.))catch|finally|throw|try(?![$_[:alnum:]])(?:(?=\.\.\.)|(?!\.))",
    r"[$_[:alpha:]][$_[:alnum:]]*",
    r"\s+",
];

fn scan_line(c: &mut Criterion) {
    let engine = Engine::default();
    let scanner = engine.create_scanner(PATTERNS.iter().copied()).unwrap();
    let buffer = engine.create_buffer("async function test() { return true; }");

    c.bench_function("scan whole line", |b| {
        b.iter(|| {
            let mut pos = 0;
            let mut matches = 0;
            while let Some(m) = scanner.find_next_match(&buffer, pos).unwrap() {
                matches += 1;
                pos = (m.end() as usize).max(pos + 1);
            }
            std::hint::black_box(matches);
        })
    });
}

fn create_scanner(c: &mut Criterion) {
    let engine = Engine::new(EngineOptions::default().cache(PatternCache::new()));
    engine.create_scanner(PATTERNS.iter().copied()).unwrap();

    c.bench_function("create scanner with warm cache", |b| {
        b.iter(|| {
            let scanner = engine.create_scanner(PATTERNS.iter().copied()).unwrap();
            std::hint::black_box(scanner);
        })
    });

    c.bench_function("create scanner with cold cache", |b| {
        b.iter(|| {
            let engine = Engine::default();
            let scanner = engine.create_scanner(PATTERNS.iter().copied()).unwrap();
            std::hint::black_box(scanner);
        })
    });
}

criterion_group!(benches, scan_line, create_scanner);
criterion_main!(benches);
