// Check-digit validator benchmarks
// Run with: cargo bench -p castra-validator

use std::hint::black_box;

use castra_validator::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_cpf(c: &mut Criterion) {
    c.bench_function("cpf_valid_formatted", |b| {
        b.iter(|| Cpf.validate(black_box("529.982.247-25")));
    });
    c.bench_function("cpf_repeated_digits", |b| {
        b.iter(|| Cpf.validate(black_box("111.111.111-11")));
    });
}

fn bench_cnpj(c: &mut Criterion) {
    c.bench_function("cnpj_valid_formatted", |b| {
        b.iter(|| Cnpj.validate(black_box("11.222.333/0001-81")));
    });
}

fn bench_mask(c: &mut Criterion) {
    c.bench_function("mask_cpf", |b| {
        b.iter(|| Mask::Cpf.apply(black_box("52998224725")));
    });
}

fn bench_whole_form(c: &mut Criterion) {
    let validator = FormValidator::default();
    let record = FormRecord::new()
        .with("animal", "Mel")
        .with("tutor", "Ana Souza")
        .with("cpf", "529.982.247-25")
        .with("celular", "(11) 98765-4321")
        .with("cep", "01310-100")
        .with("microchip", "982000123456789");

    c.bench_function("whole_form", |b| {
        b.iter(|| validator.validate(black_box(&record)));
    });
}

criterion_group!(benches, bench_cpf, bench_cnpj, bench_mask, bench_whole_form);
criterion_main!(benches);
