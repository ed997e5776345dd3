use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn integration_draw_and_format() {
    // Draw a small seeded batch and verify count and output formatting
    let mut rng = StdRng::seed_from_u64(7);
    let vs = ggrvs_lib::sample::draw_many(2.0, 1.0, 5, &mut rng).expect("draw");
    assert_eq!(vs.len(), 5);
    for v in &vs {
        let line = ggrvs_lib::sample::format_variate(*v);
        let (_, frac) = line.split_once('.').expect("decimal point");
        assert_eq!(frac.len(), 15);
        assert!(line.parse::<f64>().expect("parseable") > 0.0);
    }
}
