//! Unit tests for model selection and parameter normalisation.

use rstest::rstest;

use super::*;

#[rstest]
#[case("erdos-renyi", ModelKind::ErdosRenyi)]
#[case("erdos_renyi", ModelKind::ErdosRenyi)]
#[case(" Barabasi-Albert ", ModelKind::BarabasiAlbert)]
#[case("WATTS_STROGATZ", ModelKind::WattsStrogatz)]
fn model_kind_parses_labels_and_aliases(#[case] raw: &str, #[case] expected: ModelKind) {
    let kind: ModelKind = raw.parse().expect("label must parse");
    assert_eq!(kind, expected);
}

#[test]
fn model_kind_rejects_unknown_labels() {
    let err = "small-world".parse::<ModelKind>().expect_err("unknown label");
    assert!(matches!(
        err,
        RandGraphError::InvalidParameter {
            parameter: "model",
            ..
        }
    ));
}

#[test]
fn model_kind_labels_round_trip_through_display() {
    for kind in ModelKind::ALL {
        assert_eq!(kind.to_string().parse::<ModelKind>().ok(), Some(kind));
    }
}

#[rstest]
#[case::m0_equals_n(BarabasiAlbertParams { n: 3, m0: 3, m: 1 }, "m0")]
#[case::m0_above_n(BarabasiAlbertParams { n: 3, m0: 7, m: 1 }, "m0")]
#[case::m_above_m0(BarabasiAlbertParams { n: 10, m0: 2, m: 3 }, "m")]
fn barabasi_albert_rejects_inconsistent_sizes(
    #[case] params: BarabasiAlbertParams,
    #[case] parameter: &str,
) {
    let err = params.validate().expect_err("params must be rejected");
    let RandGraphError::InvalidParameter { parameter: got, .. } = err;
    assert_eq!(got, parameter);
}

#[rstest]
#[case::odd_k(WattsStrogatzParams { n: 10, k: 3, p: 0.1 }, "k")]
#[case::k_equals_n(WattsStrogatzParams { n: 4, k: 4, p: 0.1 }, "k")]
#[case::empty(WattsStrogatzParams { n: 0, k: 0, p: 0.1 }, "k")]
#[case::negative_p(WattsStrogatzParams { n: 10, k: 2, p: -0.5 }, "p_watts")]
#[case::nan_p(WattsStrogatzParams { n: 10, k: 2, p: f64::NAN }, "p_watts")]
fn watts_strogatz_rejects_bad_params(
    #[case] params: WattsStrogatzParams,
    #[case] parameter: &str,
) {
    let err = params.validate().expect_err("params must be rejected");
    let RandGraphError::InvalidParameter { parameter: got, .. } = err;
    assert_eq!(got, parameter);
}

#[rstest]
#[case(f64::INFINITY)]
#[case(1.5)]
#[case(-f64::EPSILON)]
fn erdos_renyi_rejects_non_probabilities(#[case] p: f64) {
    let err = ErdosRenyiParams { n: 5, p }
        .validate()
        .expect_err("p must be rejected");
    assert!(matches!(
        err,
        RandGraphError::InvalidParameter { parameter: "p", .. }
    ));
}

#[rstest]
#[case(-0.3, 0.0)]
#[case(0.25, 0.25)]
#[case(3.0, 1.0)]
#[case(f64::INFINITY, 1.0)]
fn clamp_probability_bounds_input(#[case] raw: f64, #[case] expected: f64) {
    assert_eq!(clamp_probability("p", raw).expect("clampable"), expected);
}

#[test]
fn clamp_probability_rejects_nan() {
    assert!(clamp_probability("p", f64::NAN).is_err());
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(4, 4)]
#[case(7, 6)]
fn force_even_rounds_down(#[case] k: usize, #[case] expected: usize) {
    assert_eq!(force_even(k), expected);
}

#[test]
fn resolve_clamps_erdos_renyi_probability() {
    let raw = RawParameters {
        n: 4,
        p: 2.0,
        ..RawParameters::default()
    };
    let params = raw.resolve(ModelKind::ErdosRenyi).expect("clamped p is valid");
    assert_eq!(params, ModelParams::ErdosRenyi(ErdosRenyiParams { n: 4, p: 1.0 }));
}

#[rstest]
#[case::negative_n(RawParameters { n: -1, ..RawParameters::default() }, ModelKind::ErdosRenyi, "N")]
#[case::negative_m0(RawParameters { m0: -2, ..RawParameters::default() }, ModelKind::BarabasiAlbert, "m0")]
#[case::negative_m(RawParameters { m: -2, ..RawParameters::default() }, ModelKind::BarabasiAlbert, "m")]
#[case::negative_k(RawParameters { k: -4, ..RawParameters::default() }, ModelKind::WattsStrogatz, "k")]
#[case::m0_not_below_n(RawParameters { n: 3, m0: 3, ..RawParameters::default() }, ModelKind::BarabasiAlbert, "m0")]
#[case::nan_p(RawParameters { p: f64::NAN, ..RawParameters::default() }, ModelKind::ErdosRenyi, "p")]
fn resolve_reports_invalid_form_values(
    #[case] raw: RawParameters,
    #[case] kind: ModelKind,
    #[case] parameter: &str,
) {
    let err = raw.resolve(kind).expect_err("form values must be rejected");
    let RandGraphError::InvalidParameter { parameter: got, .. } = err;
    assert_eq!(got, parameter);
}

#[test]
fn resolve_ignores_parameters_of_other_models() {
    let raw = RawParameters {
        m0: -5,
        k: -3,
        p_watts: f64::NAN,
        ..RawParameters::default()
    };
    assert!(raw.resolve(ModelKind::ErdosRenyi).is_ok());
}

#[test]
fn default_form_values_are_valid_for_every_model() {
    let raw = RawParameters::default();
    for kind in ModelKind::ALL {
        let params = raw.resolve(kind).expect("defaults must be valid");
        assert_eq!(params.kind(), kind);
        assert_eq!(params.node_count(), 50);
    }
}

#[rstest]
#[case::erdos_renyi(ModelKind::ErdosRenyi)]
#[case::barabasi_albert(ModelKind::BarabasiAlbert)]
#[case::watts_strogatz(ModelKind::WattsStrogatz)]
fn resolve_rejects_node_counts_above_ceiling(#[case] kind: ModelKind) {
    let raw = RawParameters {
        n: i64::MAX,
        ..RawParameters::default()
    };
    let err = raw.resolve(kind).expect_err("oversized N must be rejected");
    assert!(matches!(
        err,
        RandGraphError::InvalidParameter { parameter: "N", .. }
    ));
}

#[rstest]
#[case::at_ceiling(MAX_NODES, true)]
#[case::above_ceiling(MAX_NODES + 1, false)]
fn node_ceiling_is_inclusive(#[case] n: usize, #[case] accepted: bool) {
    let requests = [
        ModelParams::ErdosRenyi(ErdosRenyiParams { n, p: 0.1 }),
        ModelParams::BarabasiAlbert(BarabasiAlbertParams { n, m0: 3, m: 2 }),
        ModelParams::WattsStrogatz(WattsStrogatzParams { n, k: 4, p: 0.1 }),
    ];
    for params in requests {
        assert_eq!(params.validate().is_ok(), accepted, "{params:?}");
    }
}
