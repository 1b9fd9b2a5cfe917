use avdecc_core::AVTP_ETHERTYPE;
use etherparse::{EtherType, Ethernet2Slice, SingleVlanSlice};
use pcap_parser::Linktype;

use super::error::FrameError;

/// AVDECC PDU carried by an Ethernet frame, with its link-layer addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvdeccFrame<'a> {
    pub src_mac: [u8; 6],
    pub dst_mac: [u8; 6],
    pub vlan_id: Option<u16>,
    /// Bytes from the AVDECC header to the end of the frame.
    pub pdu: &'a [u8],
}

/// Extract the AVDECC PDU from a link-layer frame.
///
/// Only Ethernet captures are inspected; a single 802.1Q tag is skipped.
/// Returns `Ok(None)` for any other linktype or EtherType.
pub fn parse_avdecc_frame(
    linktype: Linktype,
    data: &[u8],
) -> Result<Option<AvdeccFrame<'_>>, FrameError> {
    if linktype != Linktype::ETHERNET {
        return Ok(None);
    }

    let eth = Ethernet2Slice::from_slice_without_fcs(data)
        .map_err(|e| FrameError::Slice(e.to_string()))?;

    let (ether_type, vlan_id, pdu) = if eth.ether_type() == EtherType::VLAN_TAGGED_FRAME {
        let vlan = SingleVlanSlice::from_slice(eth.payload_slice())
            .map_err(|e| FrameError::Vlan(e.to_string()))?;
        (
            vlan.ether_type(),
            Some(vlan.vlan_identifier().value()),
            vlan.payload_slice(),
        )
    } else {
        (eth.ether_type(), None, eth.payload_slice())
    };

    if ether_type != EtherType(AVTP_ETHERTYPE) {
        return Ok(None);
    }

    Ok(Some(AvdeccFrame {
        src_mac: eth.source(),
        dst_mac: eth.destination(),
        vlan_id,
        pdu,
    }))
}

/// Format a MAC address as colon-separated lowercase hex.
pub fn format_mac(mac: &[u8; 6]) -> String {
    mac.iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}
