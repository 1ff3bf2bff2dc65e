use criterion::{black_box, criterion_group, criterion_main, Criterion};

use heredity::{
    inference,
    model::HeredityModel,
    pedigree::{MemberRecord, Pedigree},
};

fn record(name: &str, parents: Option<[&str; 2]>, observed_trait: Option<bool>) -> MemberRecord {
    let [mother, father] = match parents {
        Some([mother, father]) => [Some(mother.to_string()), Some(father.to_string())],
        None                   => [None, None],
    };
    MemberRecord { name: name.to_string(), mother, father, observed_trait }
}

/// Two founder couples, their two children, and one grandchild.
fn seven_member_pedigree() -> Pedigree {
    let records = vec![
        record("grandmother-1", None, None),
        record("grandfather-1", None, None),
        record("grandmother-2", None, None),
        record("grandfather-2", None, None),
        record("mother", Some(["grandmother-1", "grandfather-1"]), Some(false)),
        record("father", Some(["grandmother-2", "grandfather-2"]), None),
        record("child", Some(["mother", "father"]), Some(true)),
    ];
    Pedigree::from_records(&records).expect("Benchmark pedigree should be valid")
}

fn bench_infer(c: &mut Criterion) {
    let model = HeredityModel::default();

    let trio = Pedigree::from_records(&[
        record("mother", None, None),
        record("father", None, None),
        record("child", Some(["mother", "father"]), Some(true)),
    ])
    .expect("Benchmark pedigree should be valid");

    c.bench_function("infer_trio", |b| {
        b.iter(|| inference::infer(black_box(&trio), black_box(&model)))
    });

    let family = seven_member_pedigree();
    c.bench_function("infer_seven_members", |b| {
        b.iter(|| inference::infer(black_box(&family), black_box(&model)))
    });
}

criterion_group!(benches, bench_infer);
criterion_main!(benches);
