use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matdialogs::{
    ButtonRole, DialogButtons, DialogButtonsMeasurePolicy, DialogButtonsSpec, DialogEnvironment,
    ImageRes, MaterialDialog,
};
use matdialogs_testing::FixedMeasurable;
use matdialogs_ui_layout::{Constraints, Density, Measurable};

const BAR_WIDTHS: &[f32] = &[280.0, 560.0];
const BUTTON_WIDTH: f32 = 96.0;

fn measurables(count: usize) -> Vec<Box<dyn Measurable>> {
    (0..count)
        .map(|id| {
            let role = match id % 4 {
                0 => ButtonRole::Negative,
                1 => ButtonRole::Positive,
                2 => ButtonRole::Text,
                _ => ButtonRole::Accessibility,
            };
            FixedMeasurable::boxed(role, BUTTON_WIDTH, 36.0, id)
        })
        .collect()
}

fn bench_policy(c: &mut Criterion) {
    let policy =
        DialogButtonsMeasurePolicy::new(&DialogButtonsSpec::default(), &Density::default());
    let children = measurables(4);
    let mut group = c.benchmark_group("dialog_buttons_policy");
    for &width in BAR_WIDTHS {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let layout = policy.layout(&children, Constraints::loose(width, f32::INFINITY));
                black_box(layout);
            });
        });
    }
    group.finish();
}

fn bench_declare_and_measure(c: &mut Criterion) {
    let env = DialogEnvironment::default();
    c.bench_function("dialog_buttons_declare_and_measure", |b| {
        b.iter(|| {
            let mut dialog = MaterialDialog::new();
            dialog.show();
            let mut node = DialogButtons(&env, &mut dialog, DialogButtonsSpec::default(), |scope| {
                scope.positive_gate("valid", true);
                scope.accessibility_button(ImageRes(0), None, || {});
                scope.negative_button("Cancel", None, false, || {});
                scope.button("Details", None, || {});
                scope.positive_button("Confirm", None, false, || {});
            });
            black_box(node.measure(Constraints::loose(320.0, f32::INFINITY)).mode);
        });
    });
}

criterion_group!(layout, bench_policy, bench_declare_and_measure);
criterion_main!(layout);
