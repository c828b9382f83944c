//! Integration tests for cidr-calc
//!
//! These tests drive the public API the way the command line does: parse,
//! query or divide, then check the rendered networks.

use cidr_calc::{
    addresses, contains, divide_by_capacity, divide_equally, network_details, overlaps,
    AddressSpace, CidrError,
};
use num_bigint::BigUint;
use num_traits::One;

fn cidr(s: &str) -> AddressSpace {
    AddressSpace::parse(s).expect("valid CIDR in test")
}

fn strings(networks: &[AddressSpace]) -> Vec<String> {
    networks.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_equal_division_scenarios() {
    let cases: Vec<(&str, i64, Vec<&str>)> = vec![
        ("10.0.0.0/16", 2, vec!["10.0.0.0/17", "10.0.128.0/17"]),
        (
            "192.168.0.0/24",
            4,
            vec![
                "192.168.0.0/26",
                "192.168.0.64/26",
                "192.168.0.128/26",
                "192.168.0.192/26",
            ],
        ),
        (
            "2001:db8::/32",
            3,
            vec!["2001:db8::/34", "2001:db8:4000::/34", "2001:db8:8000::/34"],
        ),
    ];
    for (input, divisor, expected) in cases {
        let networks = divide_equally(&cidr(input), divisor)
            .unwrap_or_else(|e| panic!("dividing {input} by {divisor}: {e}"));
        assert_eq!(strings(&networks), expected, "{input} / {divisor}");
    }
}

#[test]
fn test_equal_division_errors() {
    assert!(matches!(
        divide_equally(&cidr("10.0.0.0/16"), 0),
        Err(CidrError::InvalidDivisor { divisor: 0 })
    ));
    assert!(matches!(
        divide_equally(&cidr("2001:db8::/128"), 3),
        Err(CidrError::InsufficientSpace { .. })
    ));
}

#[test]
fn test_capacity_division_scenarios() {
    assert_eq!(
        strings(&divide_by_capacity(&cidr("192.168.0.0/24"), &[20, 10, 30]).unwrap()),
        vec!["192.168.0.0/27", "192.168.0.32/28", "192.168.0.48/27"]
    );
    assert!(divide_by_capacity(&cidr("192.168.0.0/24"), &[])
        .unwrap()
        .is_empty());
    match divide_by_capacity(&cidr("192.168.0.0/24"), &[257]) {
        Err(CidrError::InsufficientSpace {
            available,
            required,
        }) => {
            assert_eq!(available, BigUint::from(256u32));
            assert_eq!(required, BigUint::from(512u32));
        }
        other => panic!("expected InsufficientSpace, got {other:?}"),
    }
}

#[test]
fn test_counts() {
    assert_eq!(
        cidr("10.10.10.10/32").total_address_count(),
        BigUint::one()
    );
    assert_eq!(
        cidr("2001:db8::/32").total_address_count(),
        BigUint::one() << 96u32
    );
    assert_eq!(
        cidr("10.0.0.0/16").usable_host_count(),
        BigUint::from(65534u32)
    );
}

#[test]
fn test_queries() {
    let net = cidr("10.0.0.0/16");
    assert!(contains(&net, "10.0.14.5".parse().unwrap()));
    assert!(!contains(&net, "2001:db8::".parse().unwrap()));
    assert!(overlaps(&net, &cidr("10.0.14.0/22")));
    assert!(!overlaps(&net, &cidr("10.1.0.0/28")));
}

#[test]
fn test_divided_networks_stay_inside_parent() {
    let parent = cidr("172.16.0.0/12");
    let networks = divide_equally(&parent, 7).unwrap();
    assert_eq!(networks.len(), 7);
    for (i, network) in networks.iter().enumerate() {
        assert!(contains(&parent, network.base()), "{network} outside {parent}");
        assert!(contains(&parent, network.last_address()));
        for other in &networks[i + 1..] {
            assert!(!overlaps(network, other), "{network} overlaps {other}");
        }
    }
}

#[test]
fn test_explain_and_list_small_network() {
    let net = cidr("192.168.10.0/30");
    let details = network_details(&net);
    assert_eq!(details.address_count, "4");
    assert_eq!(details.host_count, "2");
    assert_eq!(details.broadcast, Ok("192.168.10.3".parse().unwrap()));

    let listed: Vec<String> = addresses(&net).map(|a| a.to_string()).collect();
    assert_eq!(
        listed,
        vec!["192.168.10.0", "192.168.10.1", "192.168.10.2", "192.168.10.3"]
    );
}

#[test]
fn test_next_network() {
    assert_eq!(
        cidr("10.0.0.0/16").next_subnet(27).unwrap().to_string(),
        "10.1.0.0/27"
    );
}

#[test]
fn test_command_line_round_trip() {
    use cidr_calc::cli::{run, Cli};
    use cidr_calc::config::OutputConfig;
    use clap::Parser;

    let config = OutputConfig::resolve(true, None);
    let exec = |args: &[&str]| -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("valid arguments");
        let mut out = Vec::new();
        run(&cli.command, &config, &mut out).expect("command succeeds");
        String::from_utf8(out).expect("utf-8 output")
    };

    assert_eq!(exec(&["cidr-calc", "count", "192.168.0.0/24"]), "256\n");
    assert_eq!(
        exec(&["cidr-calc", "--no-color", "divide", "10.0.0.0/16", "2"]),
        "  [Networks]\n10.0.0.0/17\n10.0.128.0/17\n"
    );
    let table = exec(&["cidr-calc", "d", "192.168.0.0/24", "--hosts", "20,10,30"]);
    assert_eq!(table.lines().count(), 4);
    assert!(table.lines().nth(3).unwrap().starts_with("192.168.0.48/27"));

    assert!(Cli::try_parse_from(["cidr-calc", "divide", "10.0.0.0/16"]).is_err());
    assert!(Cli::try_parse_from(["cidr-calc", "unknown"]).is_err());
}
