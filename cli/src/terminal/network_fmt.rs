use colored::*;
use nodeprobe_common::network::interface::{InterfaceAddress, InterfaceClass};

use crate::terminal::{colors, print};

pub fn class_to_colored(class: InterfaceClass) -> ColoredString {
    let color = match class {
        InterfaceClass::Matched => colors::MATCHED,
        InterfaceClass::NonMatching => colors::NON_MATCHING,
        InterfaceClass::Disconnected => colors::DISCONNECTED,
    };
    class.label().color(color)
}

pub fn to_key_value_pair(
    interface: &InterfaceAddress,
    class: InterfaceClass,
) -> Vec<(String, ColoredString)> {
    let address: ColoredString = match &interface.ipv4_address {
        Some(address) => address.color(colors::IPV4_ADDR),
        None => "none".color(colors::SEPARATOR),
    };
    vec![
        ("IPv4".to_string(), address),
        ("Class".to_string(), class_to_colored(class)),
        ("Flag".to_string(), class.legacy_flag().to_string().normal()),
    ]
}

pub fn print_interface(interface: &InterfaceAddress, class: InterfaceClass, idx: usize) {
    print::tree_head(idx, &interface.interface_name);
    print::as_tree_one_level(to_key_value_pair(interface, class));
}
