use std::fmt::{Formatter, Display};
use std::str::FromStr;
use crate::error::IdentError;

// Numeric identifiers are stable: they show up in logs and in tooling
// consuming them, and must not be renumbered when a variant is added.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Hypervisor {
    None = 0,
    Kvm = 1,
    HyperV = 2,
    Vmware = 3,
    Unknown = 4,
}

impl Hypervisor {
    // table order, matches the numeric identifiers
    pub const ALL: [Hypervisor; 5] = [
        Hypervisor::None,
        Hypervisor::Kvm,
        Hypervisor::HyperV,
        Hypervisor::Vmware,
        Hypervisor::Unknown,
    ];

    /// Maps a raw identifier to a variant.  Values with no named variant,
    /// including identifiers newer than this crate, map to `Unknown`.
    pub fn from_id(id: u32) -> Hypervisor {
        match id {
            0 => Hypervisor::None,
            1 => Hypervisor::Kvm,
            2 => Hypervisor::HyperV,
            3 => Hypervisor::Vmware,
            _ => Hypervisor::Unknown,
        }
    }

    /// The human-readable label.  Returned strings are fixed for the
    /// lifetime of the process and safe to hold indefinitely.
    pub fn name(&self) -> &'static str {
        match *self {
            Hypervisor::None => "none",
            Hypervisor::Kvm => "KVM",
            Hypervisor::HyperV => "Hyper-V",
            Hypervisor::Vmware => "VMware",
            _ => "unknown",
        }
    }

    pub fn id(&self) -> u32 {
        *self as u32
    }
}

impl Display for Hypervisor {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Hypervisor {
    type Err = IdentError;

    fn from_str(name: &str) -> Result<Hypervisor, IdentError> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Ok(Hypervisor::None),
            "kvm" => Ok(Hypervisor::Kvm),
            "hyper-v" | "hyperv" => Ok(Hypervisor::HyperV),
            "vmware" => Ok(Hypervisor::Vmware),
            "unknown" => Ok(Hypervisor::Unknown),
            _ => Err(IdentError::UnrecognizedName(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_byte_exact() {
        assert_eq!(Hypervisor::None.name(), "none");
        assert_eq!(Hypervisor::Kvm.name(), "KVM");
        assert_eq!(Hypervisor::HyperV.name(), "Hyper-V");
        assert_eq!(Hypervisor::Vmware.name(), "VMware");
        assert_eq!(Hypervisor::Unknown.name(), "unknown");
    }

    #[test]
    fn unassigned_ids_resolve_to_unknown() {
        assert_eq!(Hypervisor::from_id(4).name(), "unknown");
        assert_eq!(Hypervisor::from_id(999).name(), "unknown");
        assert_eq!(Hypervisor::from_id(u32::MAX).name(), "unknown");
    }

    #[test]
    fn ids_round_trip() {
        for hv in Hypervisor::ALL.iter() {
            assert_eq!(Hypervisor::from_id(hv.id()), *hv);
        }
    }

    #[test]
    fn resolution_is_stable_across_calls() {
        let first = Hypervisor::from_id(2).name();
        for _ in 0..1000 {
            assert_eq!(Hypervisor::from_id(2).name(), first);
        }
    }

    #[test]
    fn display_matches_name() {
        for hv in Hypervisor::ALL.iter() {
            assert_eq!(hv.to_string(), hv.name());
        }
    }

    #[test]
    fn labels_parse_back() {
        assert_eq!("none".parse::<Hypervisor>().unwrap(), Hypervisor::None);
        assert_eq!("KVM".parse::<Hypervisor>().unwrap(), Hypervisor::Kvm);
        assert_eq!("Hyper-V".parse::<Hypervisor>().unwrap(), Hypervisor::HyperV);
        assert_eq!("hyperv".parse::<Hypervisor>().unwrap(), Hypervisor::HyperV);
        assert_eq!("VMware".parse::<Hypervisor>().unwrap(), Hypervisor::Vmware);
        assert_eq!("vmware".parse::<Hypervisor>().unwrap(), Hypervisor::Vmware);
    }

    #[test]
    fn unrecognized_names_are_rejected() {
        match "xen".parse::<Hypervisor>() {
            Err(IdentError::UnrecognizedName(name)) => assert_eq!(name, "xen"),
            other => panic!("expected UnrecognizedName, got {other:?}"),
        }
    }
}
