//! Algebraic laws of the coordinate algebra under resolution.
//!
//! Every law is checked over pools of points and vectors spanning the
//! representative frames: the default frame, figure fractions, absolute
//! inches, a user unit, an axis data frame, and an axis relative frame.
//! Deferred composites are deliberately over-represented in the pools.

use candru::{Canvas, Point, SizeUnit, Vector, height, width};

const TAGS: [&str; 6] = ["default", "figure", "newunit", "axis_ax1", "ax1", "absolute"];

/// Canvases differing in where the axis sits (one corner given in the
/// user unit, one in absolute inches), so axis-dependent frames are not
/// accidentally axis-aligned with the unit frame.
fn canvases() -> Vec<Canvas> {
    [
        Point::new(0.3, 0.2, "newunit"),
        Point::new(0.02, 0.4, "absolute"),
    ]
    .into_iter()
    .map(|lower| {
        let mut c = Canvas::new(5.0, 5.0, SizeUnit::Inches);
        c.add_unit(
            "newunit",
            width(0.5, "figure") + height(0.6, "figure"),
            Point::new(0.3, 0.3, "default"),
        )
        .unwrap();
        c.add_axis("ax1", lower, Point::new(0.9, 0.95, "default"))
            .unwrap();
        c
    })
    .collect()
}

fn vectors() -> Vec<Vector> {
    let mut pool = Vec::new();
    for tag in TAGS {
        pool.push(Vector::new(0.3, 0.7, tag));
        pool.push(Vector::new(-0.2, -0.9, tag) + Vector::new(0.22, 0.1, "absolute"));
        pool.push(
            Vector::new(0.0, 0.3, tag) + Vector::new(0.01, -0.01, "ax1")
                - Vector::new(1.1, 1.1, "default"),
        );
        pool.push(Point::new(0.2, 0.3, tag) - Point::new(0.5, 0.1, "newunit"));
        pool.push(
            (Point::new(0.2, 0.3, tag) >> Point::new(1.0, 1.0, "absolute"))
                - Point::new(0.5, 0.1, "newunit"),
        );
        pool.push(
            (Point::new(0.2, 0.3, tag) << Point::new(1.0, 1.0, "absolute"))
                - Point::new(0.5, 0.1, "newunit"),
        );
        pool.push(
            (Point::new(0.2, 0.3, tag) | Point::new(1.0, 1.0, "absolute"))
                - Point::new(0.5, 0.1, "newunit"),
        );
    }
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.1, -1.3)] {
        pool.push(Vector::new(x, y, "figure"));
        pool.push(Vector::new(x, y, "absolute"));
        pool.push(Vector::new(x, y, "newunit"));
    }
    pool
}

fn points() -> Vec<Point> {
    let mut pool = Vec::new();
    for tag in TAGS {
        pool.push(Point::new(0.3, 0.2, tag));
        pool.push(Point::new(0.0, 0.0, tag));
        pool.push(Point::new(0.0, 1.0, tag));
        pool.push(Point::new(100.0, 0.0, tag));
        pool.push(Point::new(0.1, -0.2, tag) + Vector::new(1.0, 1.0, "absolute"));
        pool.push(Point::new(0.1, -0.2, tag) - Vector::new(1.0, 1.0, "absolute"));
        pool.push(Point::new(1.0, 1.0, tag) >> Point::new(0.3, 0.1, "absolute"));
        pool.push(Point::new(1.0, 1.0, tag) << Point::new(0.3, 0.1, "figure"));
        pool.push(Point::new(1.0, 1.0, tag) | Point::new(0.3, 0.1, "figure"));
        pool.push(
            Point::new(0.1, -0.2, "figure")
                + (Point::new(1.1, 2.1, tag) - Point::new(0.3, 0.6, "absolute")) / 2.0,
        );
    }
    pool
}

fn xy_of_point(c: &Canvas, p: &Point) -> (f64, f64) {
    c.resolve_point(p)
        .unwrap()
        .xy()
        .expect("resolved points are concrete")
}

fn xy_of_vector(c: &Canvas, v: &Vector) -> (f64, f64) {
    c.resolve_vector(v)
        .unwrap()
        .xy()
        .expect("resolved vectors are concrete")
}

fn assert_close(a: (f64, f64), b: (f64, f64), what: &str) {
    assert!(
        (a.0 - b.0).abs() < 1e-8 && (a.1 - b.1).abs() < 1e-8,
        "{what}: {a:?} != {b:?}"
    );
}

#[test]
fn additive_and_multiplicative_identities() {
    for c in canvases() {
        for v in vectors() {
            let r = xy_of_vector(&c, &v);
            assert_close(
                xy_of_vector(&c, &(v.clone() + Vector::new(0.0, 0.0, "default"))),
                r,
                "additive identity",
            );
            assert_close(
                xy_of_vector(&c, &(v.clone() - v.clone())),
                (0.0, 0.0),
                "additive inverse",
            );
            assert_close(
                xy_of_vector(&c, &(v.clone() * 1.0)),
                r,
                "multiplicative identity",
            );
        }
    }
}

#[test]
fn vector_addition_commutes() {
    for c in canvases() {
        for v1 in vectors() {
            for v2 in vectors() {
                assert_close(
                    xy_of_vector(&c, &(v1.clone() + v2.clone())),
                    xy_of_vector(&c, &(v2.clone() + v1.clone())),
                    "commutativity",
                );
            }
        }
    }
}

#[test]
fn resolution_is_linear_over_addition() {
    for c in canvases() {
        for v1 in vectors() {
            for v2 in vectors() {
                let lhs = xy_of_vector(&c, &(v1.clone() + v2.clone()));
                let a = xy_of_vector(&c, &v1);
                let b = xy_of_vector(&c, &v2);
                assert_close(lhs, (a.0 + b.0, a.1 + b.1), "linearity of addition");
            }
        }
    }
}

#[test]
fn vector_addition_associates_through_points() {
    let anchors = [
        Point::new(0.2, 0.2, "ax1"),
        Point::new(0.0, 2.0, "newunit"),
    ];
    for c in canvases() {
        for v1 in vectors() {
            for v2 in vectors() {
                for p0 in &anchors {
                    assert_close(
                        xy_of_point(&c, &(p0.clone() + (v1.clone() + v2.clone()))),
                        xy_of_point(&c, &((p0.clone() + v1.clone()) + v2.clone())),
                        "associativity through a point",
                    );
                    assert_close(
                        xy_of_point(&c, &(v1.clone() + (p0.clone() + v2.clone()))),
                        xy_of_point(&c, &((v1.clone() + p0.clone()) + v2.clone())),
                        "associativity, vector first",
                    );
                }
            }
        }
    }
}

#[test]
fn scalar_multiplication_is_linear_and_associative() {
    for c in canvases() {
        for v in vectors() {
            let r = xy_of_vector(&c, &v);
            assert_close(
                xy_of_vector(&c, &(2.3 * v.clone())),
                (2.3 * r.0, 2.3 * r.1),
                "linearity of scalar multiplication",
            );
            assert_close(
                xy_of_vector(&c, &(v.clone() * 2.3)),
                xy_of_vector(&c, &(2.3 * v.clone())),
                "scalar multiplication commutes",
            );
            assert_close(
                xy_of_vector(&c, &(2.1 * (1.2 * v.clone()))),
                xy_of_vector(&c, &((2.1 * 1.2) * v.clone())),
                "associativity of scalar multiplication",
            );
        }
    }
}

#[test]
fn scalar_division_is_linear_and_composes() {
    for c in canvases() {
        for v in vectors() {
            let r = xy_of_vector(&c, &v);
            assert_close(
                xy_of_vector(&c, &(v.clone() / 2.3)),
                (r.0 / 2.3, r.1 / 2.3),
                "linearity of division",
            );
            assert_close(
                xy_of_vector(&c, &(v.clone() / 1.2 / 2.1)),
                xy_of_vector(&c, &(v.clone() / (1.2 * 2.1))),
                "composition of division",
            );
        }
    }
}

#[test]
fn width_and_height_decompose_every_vector() {
    for c in canvases() {
        for v in vectors() {
            let r = xy_of_vector(&c, &v);
            let w = xy_of_vector(&c, &v.width());
            let h = xy_of_vector(&c, &v.height());
            assert_close((w.0 + h.0, w.1 + h.1), r, "width + height");
            assert_close(w, (r.0, 0.0), "width matches resolved width");
            assert_close(h, (0.0, r.1), "height matches resolved height");
        }
    }
}

#[test]
fn meet_commutes_with_resolution() {
    for c in canvases() {
        for p1 in points() {
            for p2 in points() {
                let a = xy_of_point(&c, &p1);
                let b = xy_of_point(&c, &p2);
                assert_close(
                    xy_of_point(&c, &(p1.clone() >> p2.clone())),
                    (a.0, b.1),
                    "meet right",
                );
                assert_close(
                    xy_of_point(&c, &(p1.clone() << p2.clone())),
                    (b.0, a.1),
                    "meet left",
                );
            }
        }
    }
}

#[test]
fn mean_commutes_with_resolution() {
    for c in canvases() {
        for p1 in points() {
            for p2 in points() {
                let a = xy_of_point(&c, &p1);
                let b = xy_of_point(&c, &p2);
                assert_close(
                    xy_of_point(&c, &(p1.clone() | p2.clone())),
                    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0),
                    "mean",
                );
            }
        }
    }
}

#[test]
fn point_translation_matches_componentwise_resolution() {
    for c in canvases() {
        for p in points() {
            let shift = Vector::new(0.0, 0.0, "ax1");
            let lhs = xy_of_point(&c, &(p.clone() + shift.clone()));
            let a = xy_of_point(&c, &p);
            let b = xy_of_vector(&c, &shift);
            assert_close(lhs, (a.0 + b.0, a.1 + b.1), "translation by an axis zero");
        }
    }
}
