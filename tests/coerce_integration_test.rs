use pliant::input::{coerce_query, coerce_str};
use pliant::schema::{
    array, boolean, boxed, choice, custom, enumeration, field, infer_schema, number, object,
    string, BoxedSchema, IntoJson, Schema,
};
use serde_json::{json, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Inputs covering every input kind, including nesting.
fn sample_inputs() -> Vec<Value> {
    vec![
        Value::Null,
        json!(0),
        json!(-123.5),
        json!(u64::MAX),
        json!(""),
        json!("false"),
        json!("12abc"),
        json!(true),
        json!(false),
        json!([]),
        json!([1, "2", [3, { "x": null }]]),
        json!({}),
        json!({ "n": { "deep": [true, { "deeper": "x" }] } }),
    ]
}

/// Tests that every schema kind accepts every input kind without panicking.
#[test]
fn test_totality_across_inputs() {
    init_logging();

    let schemas: Vec<BoxedSchema> = vec![
        boxed(number()),
        boxed(string()),
        boxed(boolean()),
        boxed(array(number())),
        boxed(object(vec![field(
            "n",
            boxed(object(vec![field("deep", boxed(array(string())))])),
        )])),
        boxed(choice(vec![1, 2, 3], 1)),
        boxed(enumeration(vec!["a", "b"])),
        boxed(custom(|v: &Value| v.is_null())),
    ];

    for schema in &schemas {
        for input in sample_inputs() {
            let _ = schema.coerce(&input);
        }
    }
}

/// Tests that re-coercing an output through the same schema is the identity.
#[test]
fn test_idempotence() {
    init_logging();

    fn check<S>(schema: &S)
    where
        S: Schema,
        S::Output: IntoJson + Clone + PartialEq + std::fmt::Debug,
    {
        for input in sample_inputs() {
            let once = schema.coerce(&input);
            let twice = schema.coerce(&once.clone().into_json());
            assert_eq!(once, twice, "input {}", input);
        }
    }

    check(&number());
    check(&string());
    check(&boolean());
    check(&array(boolean()));
    check(&choice(vec!["x", "y"], "y"));
    check(&enumeration(vec![1.0, 2.0]));
    check(&object(vec![field("n", boxed(number())), field("s", boxed(string()))]));
}

#[test]
fn test_number_rules() {
    let ns = number();
    assert_eq!(ns.coerce(&json!(-123.5)), -123.5);
    assert_eq!(ns.coerce(&json!("123abc")), 0.0);
    assert_eq!(ns.coerce(&json!("-123")), -123.0);
    assert_eq!(ns.coerce(&json!(true)), 1.0);
    assert_eq!(ns.coerce(&json!(false)), 0.0);
    assert_eq!(ns.coerce(&Value::Null), 0.0);
}

#[test]
fn test_string_rules() {
    let ss = string();
    assert_eq!(ss.coerce(&json!(123)), "123");
    assert_eq!(ss.coerce(&json!(true)), "true");
    assert_eq!(ss.coerce(&Value::Null), "");
}

#[test]
fn test_boolean_rules() {
    let bs = boolean();
    assert!(!bs.coerce(&json!("false")));
    assert!(!bs.coerce(&json!("FALSE")));
    assert!(!bs.coerce(&json!("")));
    assert!(bs.coerce(&json!("anything")));
    assert!(!bs.coerce(&json!([])));
    assert!(bs.coerce(&json!([1, 2])));
    assert!(!bs.coerce(&Value::Null));
}

#[test]
fn test_array_rules() {
    let ans = array(number());
    assert_eq!(ans.coerce(&json!(["-1", null, 123])), vec![-1.0, 0.0, 123.0]);
    assert_eq!(ans.coerce(&Value::Null), Vec::<f64>::new());
}

/// Tests nested object defaults with statically typed output.
#[test]
fn test_typed_object_rules() {
    let schema = object((
        field("n", number()),
        field("s", string()),
        field("o", object((field("n2", number()), field("b2", boolean())))),
    ));

    let parsed = schema.coerce(&json!({ "s": 234, "o": { "n2": 1 } }));
    let (n, s, o) = parsed.unwrap();
    assert_eq!(n, 0.0);
    assert_eq!(s, "234");
    assert_eq!(o, Some((1.0, false)));

    let parsed = schema.coerce(&json!({ "n": 2 }));
    assert_eq!(parsed, Some((2.0, String::new(), None)));
}

/// Tests the same nested object defaults through dynamic schemas.
#[test]
fn test_dynamic_object_rules() {
    let schema = object(vec![
        field("n", boxed(number())),
        field("s", boxed(string())),
        field(
            "o",
            boxed(object(vec![field("n2", boxed(number())), field("b2", boxed(boolean()))])),
        ),
    ]);

    let parsed = schema.coerce(&json!({ "s": 234, "o": { "n2": 1 } }));
    assert_eq!(
        parsed.into_json(),
        json!({ "n": 0.0, "s": "234", "o": { "n2": 1.0, "b2": false } })
    );

    let parsed = schema.coerce(&json!({ "n": 2 }));
    assert_eq!(parsed.into_json(), json!({ "n": 2.0, "s": "", "o": null }));
}

/// Tests that arrays are read as objects keyed by element index.
#[test]
fn test_object_rules_on_array_input() {
    let typed = object((field("n", number()), field("0", number())));
    assert_eq!(typed.coerce(&json!([7, 8])), Some((0.0, 7.0)));
    assert_eq!(typed.coerce(&json!("[7, 8]")), None);

    let dynamic = object(vec![field("1", boxed(string())), field("x", boxed(boolean()))]);
    let parsed = dynamic.coerce(&json!([null, 12]));
    assert_eq!(parsed.into_json(), json!({ "1": "12", "x": false }));
}

/// Tests that choice candidates beyond 2^53 are only picked on an exact match.
#[test]
fn test_choice_large_integer_candidates() {
    let cs = choice(vec![9007199254740993i64, 1], 0);
    assert_eq!(cs.coerce(&json!(9007199254740992i64)), 0);
    assert_eq!(cs.coerce(&json!(9007199254740993i64)), 9007199254740993);
    assert_eq!(cs.coerce(&json!(1.0)), 1);

    let js = choice(vec![json!(u64::MAX)], json!("none"));
    assert_eq!(js.coerce(&json!(u64::MAX - 1)), json!("none"));
    assert_eq!(js.coerce(&json!(u64::MAX)), json!(u64::MAX));
}

#[test]
fn test_enumeration_and_choice_differ() {
    let es = enumeration(vec![1.0, 2.0, 3.0]);
    assert_eq!(es.coerce(&json!("2")), 2.0);
    assert_eq!(es.coerce(&json!(5)), 0.0);

    let cs = choice(vec![1.0, 2.0, 3.0], 1.0);
    assert_eq!(cs.coerce(&json!("2")), 1.0);
    assert_eq!(cs.coerce(&json!(2)), 2.0);
}

/// Tests the adapters and inference working together on web-style input.
#[test]
fn test_shape_from_sample_and_query() {
    init_logging();

    let schema = infer_schema(&json!({ "page": 1, "q": "", "exact": false }));
    assert_eq!(
        coerce_query(&schema, "q=rust&page=2&exact=FALSE&ignored=1"),
        json!({ "page": 2.0, "q": "rust", "exact": false })
    );
    assert_eq!(
        coerce_str(&schema, r#"{"page": "x", "exact": [0]}"#).unwrap(),
        json!({ "page": 0.0, "q": "", "exact": true })
    );
}
