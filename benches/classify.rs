use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_payload::{Interpreter, ScanResult, Symbology, classify, is_web_uri, parse_contact};

const SAMPLES: [&str; 8] = [
    "sms:+420123456789:Hello",
    "tel:+420123456789",
    "MATMSG:TO:a@b.com;SUB:Hi;BODY:Yo;;",
    "geo:50.087,14.421",
    "WIFI:T:WPA;S:mynet;P:pass;;",
    "MECARD:N:Doe,John;TEL:555;EMAIL:john@example.com;;",
    "https://www.rust-lang.org/learn",
    "just some plain text",
];

const VCARD: &str = "BEGIN:VCARD\nVERSION:3.0\nN:Doe;John;;;\nFN:John Doe\n\
                     ORG:Example Corp\nTEL;TYPE=CELL:+1 555 1234\n\
                     EMAIL:john@example.com\nEND:VCARD";

fn bench_classify_qr(c: &mut Criterion) {
    c.bench_function("classify_qr_samples", |b| {
        b.iter(|| {
            for text in SAMPLES {
                black_box(classify(black_box(text), &Symbology::QrCode));
            }
        })
    });
}

fn bench_web_uri(c: &mut Criterion) {
    c.bench_function("is_web_uri", |b| {
        b.iter(|| is_web_uri(black_box("www.example.com/path?q=1&r=2")))
    });
}

fn bench_parse_mecard(c: &mut Criterion) {
    c.bench_function("parse_contact_mecard", |b| {
        b.iter(|| parse_contact(black_box(SAMPLES[5])))
    });
}

fn bench_parse_vcard(c: &mut Criterion) {
    c.bench_function("parse_contact_vcard", |b| {
        b.iter(|| parse_contact(black_box(VCARD)))
    });
}

// Parallel batch interpretation
fn bench_interpret_batch(c: &mut Criterion) {
    let interpreter = Interpreter::new();
    let scans: Vec<ScanResult> = SAMPLES
        .iter()
        .cycle()
        .take(1000)
        .map(|text| ScanResult::qr(*text))
        .collect();

    c.bench_function("interpret_batch_1000", |b| {
        b.iter(|| interpreter.interpret_batch(black_box(&scans)))
    });
}

criterion_group!(
    benches,
    bench_classify_qr,
    bench_web_uri,
    bench_parse_mecard,
    bench_parse_vcard,
    bench_interpret_batch
);
criterion_main!(benches);
