// EC2 Rust Library for Amazon EC2 Compatible Compute APIs
// Copyright 2025 The ec2 crate authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Enumerated wire values
//!
//! Each enumeration accepts its documented values plus anything else through
//! `Unknown`, so newer service values survive a round trip unchanged.

// region: flow logs

ec2_enum! {
    /// Type of resource a flow log is created for
    FlowLogsResourceType {
        Vpc => "VPC",
        Subnet => "Subnet",
        NetworkInterface => "NetworkInterface",
    }
}

ec2_enum! {
    /// Type of traffic captured by a flow log
    TrafficType {
        Accept => "ACCEPT",
        Reject => "REJECT",
        All => "ALL",
    }
}

ec2_enum! {
    /// Where flow log data is published
    LogDestinationType {
        CloudWatchLogs => "cloud-watch-logs",
        S3 => "s3",
    }
}

// endregion: flow logs

// region: tagging

ec2_enum! {
    /// Type of resource to tag on creation
    ResourceType {
        CapacityReservation => "capacity-reservation",
        ClientVpnEndpoint => "client-vpn-endpoint",
        DedicatedHost => "dedicated-host",
        Fleet => "fleet",
        FpgaImage => "fpga-image",
        Image => "image",
        Instance => "instance",
        KeyPair => "key-pair",
        LaunchTemplate => "launch-template",
        Natgateway => "natgateway",
        NetworkAcl => "network-acl",
        NetworkInterface => "network-interface",
        PlacementGroup => "placement-group",
        ReservedInstances => "reserved-instances",
        RouteTable => "route-table",
        SecurityGroup => "security-group",
        Snapshot => "snapshot",
        SpotFleetRequest => "spot-fleet-request",
        SpotInstancesRequest => "spot-instances-request",
        Subnet => "subnet",
        TransitGateway => "transit-gateway",
        Volume => "volume",
        Vpc => "vpc",
        VpcFlowLog => "vpc-flow-log",
    }
}

// endregion: tagging

// region: instances

ec2_enum! {
    /// Instance type. Only common types are named; any other type is kept as `Unknown`.
    InstanceType {
        T1Micro => "t1.micro",
        T2Nano => "t2.nano",
        T2Micro => "t2.micro",
        T2Small => "t2.small",
        T2Medium => "t2.medium",
        T2Large => "t2.large",
        T3Nano => "t3.nano",
        T3Micro => "t3.micro",
        T3Small => "t3.small",
        T3Medium => "t3.medium",
        T3Large => "t3.large",
        M1Small => "m1.small",
        M3Medium => "m3.medium",
        M4Large => "m4.large",
        M4Xlarge => "m4.xlarge",
        M5Large => "m5.large",
        M5Xlarge => "m5.xlarge",
        M52xlarge => "m5.2xlarge",
        M54xlarge => "m5.4xlarge",
        C4Large => "c4.large",
        C5Large => "c5.large",
        C5Xlarge => "c5.xlarge",
        C52xlarge => "c5.2xlarge",
        R4Large => "r4.large",
        R5Large => "r5.large",
        R5Xlarge => "r5.xlarge",
        I3Large => "i3.large",
        G4dnXlarge => "g4dn.xlarge",
        P3_2xlarge => "p3.2xlarge",
        A1Medium => "a1.medium",
        A1Large => "a1.large",
    }
}

ec2_enum! {
    /// Tenancy of an instance or reservation
    Tenancy {
        Default => "default",
        Dedicated => "dedicated",
        Host => "host",
    }
}

ec2_enum! {
    /// Instance attribute names accepted by `ModifyInstanceAttribute`
    InstanceAttributeName {
        InstanceType => "instanceType",
        Kernel => "kernel",
        Ramdisk => "ramdisk",
        UserData => "userData",
        DisableApiTermination => "disableApiTermination",
        InstanceInitiatedShutdownBehavior => "instanceInitiatedShutdownBehavior",
        RootDeviceName => "rootDeviceName",
        BlockDeviceMapping => "blockDeviceMapping",
        ProductCodes => "productCodes",
        SourceDestCheck => "sourceDestCheck",
        GroupSet => "groupSet",
        EbsOptimized => "ebsOptimized",
        SriovNetSupport => "sriovNetSupport",
        EnaSupport => "enaSupport",
    }
}

ec2_enum! {
    /// What an instance does when shut down from within
    ShutdownBehavior {
        Stop => "stop",
        Terminate => "terminate",
    }
}

// endregion: instances

// region: volumes

ec2_enum! {
    /// EBS volume type
    VolumeType {
        Standard => "standard",
        Io1 => "io1",
        Gp2 => "gp2",
        Sc1 => "sc1",
        St1 => "st1",
    }
}

ec2_enum! {
    /// EBS volume state
    VolumeState {
        Creating => "creating",
        Available => "available",
        InUse => "in-use",
        Deleting => "deleting",
        Deleted => "deleted",
        Error => "error",
    }
}

ec2_enum! {
    /// Attachment state of an EBS volume
    VolumeAttachmentState {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
        Busy => "busy",
    }
}

// endregion: volumes

// region: reserved instances

ec2_enum! {
    OfferingClassType {
        Standard => "standard",
        Convertible => "convertible",
    }
}

ec2_enum! {
    /// Payment option of a Reserved Instance offering
    OfferingTypeValues {
        HeavyUtilization => "Heavy Utilization",
        MediumUtilization => "Medium Utilization",
        LightUtilization => "Light Utilization",
        NoUpfront => "No Upfront",
        PartialUpfront => "Partial Upfront",
        AllUpfront => "All Upfront",
    }
}

ec2_enum! {
    /// Reserved Instance product platform description
    RiProductDescription {
        LinuxUnix => "Linux/UNIX",
        LinuxUnixAmazonVpc => "Linux/UNIX (Amazon VPC)",
        Windows => "Windows",
        WindowsAmazonVpc => "Windows (Amazon VPC)",
    }
}

ec2_enum! {
    ReservedInstanceState {
        PaymentPending => "payment-pending",
        Active => "active",
        PaymentFailed => "payment-failed",
        Retired => "retired",
        Queued => "queued",
        QueuedDeleted => "queued-deleted",
    }
}

ec2_enum! {
    /// ISO 4217 currency code; USD is the only documented value
    CurrencyCodeValues {
        Usd => "USD",
    }
}

ec2_enum! {
    RecurringChargeFrequency {
        Hourly => "Hourly",
    }
}

ec2_enum! {
    /// Scope of a Reserved Instance
    Scope {
        AvailabilityZone => "Availability Zone",
        Region => "Region",
    }
}

// endregion: reserved instances

// region: capacity reservations

ec2_enum! {
    /// Operating system a Capacity Reservation reserves capacity for
    CapacityReservationInstancePlatform {
        LinuxUnix => "Linux/UNIX",
        RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
        SuseLinux => "SUSE Linux",
        Windows => "Windows",
        WindowsWithSqlServer => "Windows with SQL Server",
        WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb => "Windows with SQL Server Web",
        LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb => "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
    }
}

ec2_enum! {
    CapacityReservationTenancy {
        Default => "default",
        Dedicated => "dedicated",
    }
}

ec2_enum! {
    /// How a Capacity Reservation ends
    EndDateType {
        Unlimited => "unlimited",
        Limited => "limited",
    }
}

ec2_enum! {
    /// Which instance launches a Capacity Reservation accepts
    InstanceMatchCriteria {
        Open => "open",
        Targeted => "targeted",
    }
}

ec2_enum! {
    CapacityReservationState {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
        Pending => "pending",
        Failed => "failed",
    }
}

// endregion: capacity reservations

// region: images

ec2_enum! {
    ArchitectureValues {
        I386 => "i386",
        X86_64 => "x86_64",
        Arm64 => "arm64",
    }
}

ec2_enum! {
    ImageState {
        Pending => "pending",
        Available => "available",
        Invalid => "invalid",
        Deregistered => "deregistered",
        Transient => "transient",
        Failed => "failed",
        Error => "error",
    }
}

ec2_enum! {
    ImageTypeValues {
        Machine => "machine",
        Kernel => "kernel",
        Ramdisk => "ramdisk",
    }
}

ec2_enum! {
    PlatformValues {
        Windows => "Windows",
    }
}

ec2_enum! {
    HypervisorType {
        Ovm => "ovm",
        Xen => "xen",
    }
}

ec2_enum! {
    /// Root device type
    DeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

ec2_enum! {
    VirtualizationType {
        Hvm => "hvm",
        Paravirtual => "paravirtual",
    }
}

ec2_enum! {
    ProductCodeValues {
        Devpay => "devpay",
        Marketplace => "marketplace",
    }
}

// endregion: images

// region: fleets

ec2_enum! {
    /// Progress of a fleet towards its target capacity
    FleetActivityStatus {
        Error => "error",
        PendingFulfillment => "pending_fulfillment",
        PendingTermination => "pending_termination",
        Fulfilled => "fulfilled",
    }
}

ec2_enum! {
    FleetStateCode {
        Submitted => "submitted",
        Active => "active",
        Deleted => "deleted",
        Failed => "failed",
        DeletedRunning => "deleted_running",
        DeletedTerminating => "deleted_terminating",
        Modifying => "modifying",
    }
}

ec2_enum! {
    /// Whether running instances are terminated when the target capacity decreases
    FleetExcessCapacityTerminationPolicy {
        NoTermination => "no-termination",
        Termination => "termination",
    }
}

ec2_enum! {
    FleetType {
        Request => "request",
        Maintain => "maintain",
        Instant => "instant",
    }
}

ec2_enum! {
    DefaultTargetCapacityType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    SpotAllocationStrategy {
        LowestPrice => "lowest-price",
        Diversified => "diversified",
        CapacityOptimized => "capacity-optimized",
    }
}

ec2_enum! {
    SpotInstanceInterruptionBehavior {
        Hibernate => "hibernate",
        Stop => "stop",
        Terminate => "terminate",
    }
}

ec2_enum! {
    FleetOnDemandAllocationStrategy {
        LowestPrice => "lowest-price",
        Prioritized => "prioritized",
    }
}

ec2_enum! {
    InstanceLifecycle {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

// endregion: fleets

// region: instance descriptions

ec2_enum! {
    /// Lifecycle state of an instance
    InstanceStateName {
        Pending => "pending",
        Running => "running",
        ShuttingDown => "shutting-down",
        Terminated => "terminated",
        Stopping => "stopping",
        Stopped => "stopped",
    }
}

ec2_enum! {
    MonitoringState {
        Disabled => "disabled",
        Disabling => "disabling",
        Enabled => "enabled",
        Pending => "pending",
    }
}

ec2_enum! {
    /// Attachment status of an EBS volume or network interface
    AttachmentStatus {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
    }
}

ec2_enum! {
    /// Whether an instance is a Spot or Scheduled instance
    InstanceLifecycleType {
        Spot => "spot",
        Scheduled => "scheduled",
    }
}

ec2_enum! {
    NetworkInterfaceStatus {
        Available => "available",
        Associated => "associated",
        Attaching => "attaching",
        InUse => "in-use",
        Detaching => "detaching",
    }
}

ec2_enum! {
    CapacityReservationPreference {
        Open => "open",
        None => "none",
    }
}

ec2_enum! {
    HttpTokensState {
        Optional => "optional",
        Required => "required",
    }
}

ec2_enum! {
    InstanceMetadataEndpointState {
        Disabled => "disabled",
        Enabled => "enabled",
    }
}

ec2_enum! {
    InstanceMetadataOptionsState {
        Pending => "pending",
        Applied => "applied",
    }
}

ec2_enum! {
    MarketType {
        Spot => "spot",
    }
}

ec2_enum! {
    SpotInstanceType {
        OneTime => "one-time",
        Persistent => "persistent",
    }
}

// endregion: instance descriptions

// region: instance types

ec2_enum! {
    UsageClassType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    /// Hypervisor of an instance type; differs from the image [`HypervisorType`]
    InstanceTypeHypervisor {
        Nitro => "nitro",
        Xen => "xen",
    }
}

ec2_enum! {
    PlacementGroupStrategy {
        Cluster => "cluster",
        Partition => "partition",
        Spread => "spread",
    }
}

ec2_enum! {
    DiskType {
        Hdd => "hdd",
        Ssd => "ssd",
    }
}

ec2_enum! {
    EbsOptimizedSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Default => "default",
    }
}

ec2_enum! {
    EbsEncryptionSupport {
        Unsupported => "unsupported",
        Supported => "supported",
    }
}

// endregion: instance types

// region: spot fleets

// Spot Fleet requests use camel case values where EC2 Fleet uses kebab case.

ec2_enum! {
    AllocationStrategy {
        LowestPrice => "lowestPrice",
        Diversified => "diversified",
        CapacityOptimized => "capacityOptimized",
    }
}

ec2_enum! {
    OnDemandAllocationStrategy {
        LowestPrice => "lowestPrice",
        Prioritized => "prioritized",
    }
}

ec2_enum! {
    ExcessCapacityTerminationPolicy {
        NoTermination => "noTermination",
        Default => "default",
    }
}

// endregion: spot fleets

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_known_value_maps_to_variant() {
        assert_eq!(TrafficType::from("ALL"), TrafficType::All);
        assert_eq!(
            OfferingTypeValues::from("Partial Upfront".to_string()),
            OfferingTypeValues::PartialUpfront
        );
        assert_eq!(LogDestinationType::S3.as_str(), "s3");
    }

    #[test]
    fn test_unknown_value_kept_verbatim() {
        let value = InstanceType::from("z9.mega");
        assert_eq!(value, InstanceType::Unknown("z9.mega".to_string()));
        assert_eq!(value.to_string(), "z9.mega");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            TrafficType::from_str("all").unwrap(),
            TrafficType::Unknown("all".to_string())
        );
    }

    #[test]
    fn test_unknown_holding_known_wire_value_equals_variant() {
        use crate::compute::builders::CreateFlowLogs;
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let unknown = TrafficType::Unknown("ALL".to_string());
        assert_eq!(unknown, TrafficType::All);
        assert_eq!(hash_of(&unknown), hash_of(&TrafficType::All));
        assert_ne!(unknown, TrafficType::Accept);

        let named = CreateFlowLogs::default().with_traffic_type(TrafficType::All);
        let raw = CreateFlowLogs::default().with_traffic_type(unknown);
        assert_eq!(named, raw);
        assert_eq!(hash_of(&named), hash_of(&raw));

        let json = serde_json::to_string(&raw).unwrap();
        let back: CreateFlowLogs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, raw);
        assert_eq!(back.traffic_type(), Some(&TrafficType::All));
    }

    #[test]
    fn test_spot_fleet_values_differ_from_ec2_fleet() {
        assert_eq!(AllocationStrategy::LowestPrice.as_str(), "lowestPrice");
        assert_eq!(SpotAllocationStrategy::LowestPrice.as_str(), "lowest-price");
        assert_eq!(
            ExcessCapacityTerminationPolicy::from("noTermination"),
            ExcessCapacityTerminationPolicy::NoTermination
        );
        assert_ne!(
            AllocationStrategy::from("lowest-price"),
            AllocationStrategy::LowestPrice
        );
    }

    #[test]
    fn test_values_in_declaration_order() {
        assert_eq!(TrafficType::values(), &["ACCEPT", "REJECT", "ALL"]);
    }

    quickcheck! {
        fn prop_wire_string_round_trips(s: String) -> bool {
            VolumeType::from(s.as_str()).as_str() == s
        }
    }
}
