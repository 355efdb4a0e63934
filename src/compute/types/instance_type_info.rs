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

//! Instance type capabilities as returned by `DescribeInstanceTypes`

use crate::compute::types::{
    ArchitectureValues, DeviceType, DiskType, EbsEncryptionSupport, EbsOptimizedSupport,
    InstanceType, InstanceTypeHypervisor, PlacementGroupStrategy, UsageClassType,
    VirtualizationType,
};
use crate::compute::utils::{DisplayFields, hash_float};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Describes an instance type.
#[derive(Clone, Debug, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeInfo {
    instance_type: Option<InstanceType>,
    current_generation: Option<bool>,
    free_tier_eligible: Option<bool>,
    supported_usage_classes: Option<Vec<UsageClassType>>,
    supported_root_device_types: Option<Vec<DeviceType>>,
    supported_virtualization_types: Option<Vec<VirtualizationType>>,
    bare_metal: Option<bool>,
    hypervisor: Option<InstanceTypeHypervisor>,
    processor_info: Option<ProcessorInfo>,
    v_cpu_info: Option<VCpuInfo>,
    memory_info: Option<MemoryInfo>,
    instance_storage_supported: Option<bool>,
    instance_storage_info: Option<InstanceStorageInfo>,
    ebs_info: Option<EbsInfo>,
    network_info: Option<NetworkInfo>,
    gpu_info: Option<GpuInfo>,
    fpga_info: Option<FpgaInfo>,
    placement_group_info: Option<PlacementGroupInfo>,
    inference_accelerator_info: Option<InferenceAcceleratorInfo>,
    hibernation_supported: Option<bool>,
    burstable_performance_supported: Option<bool>,
    dedicated_hosts_supported: Option<bool>,
    auto_recovery_supported: Option<bool>,
}

impl InstanceTypeInfo {
    value_accessors!(instance_type, set_instance_type, with_instance_type: InstanceType);
    copy_accessors!(
        /// Whether the type belongs to the current generation.
        current_generation, set_current_generation, with_current_generation: bool
    );
    copy_accessors!(free_tier_eligible, set_free_tier_eligible, with_free_tier_eligible: bool);
    list_accessors!(
        supported_usage_classes,
        set_supported_usage_classes,
        with_supported_usage_classes: UsageClassType
    );
    list_accessors!(
        supported_root_device_types,
        set_supported_root_device_types,
        with_supported_root_device_types: DeviceType
    );
    list_accessors!(
        supported_virtualization_types,
        set_supported_virtualization_types,
        with_supported_virtualization_types: VirtualizationType
    );
    copy_accessors!(bare_metal, set_bare_metal, with_bare_metal: bool);
    value_accessors!(hypervisor, set_hypervisor, with_hypervisor: InstanceTypeHypervisor);
    value_accessors!(processor_info, set_processor_info, with_processor_info: ProcessorInfo);
    value_accessors!(v_cpu_info, set_v_cpu_info, with_v_cpu_info: VCpuInfo);
    value_accessors!(memory_info, set_memory_info, with_memory_info: MemoryInfo);
    copy_accessors!(
        instance_storage_supported,
        set_instance_storage_supported,
        with_instance_storage_supported: bool
    );
    value_accessors!(
        /// Only set when `instance_storage_supported` is `true`.
        instance_storage_info, set_instance_storage_info, with_instance_storage_info: InstanceStorageInfo
    );
    value_accessors!(ebs_info, set_ebs_info, with_ebs_info: EbsInfo);
    value_accessors!(network_info, set_network_info, with_network_info: NetworkInfo);
    value_accessors!(gpu_info, set_gpu_info, with_gpu_info: GpuInfo);
    value_accessors!(fpga_info, set_fpga_info, with_fpga_info: FpgaInfo);
    value_accessors!(
        placement_group_info,
        set_placement_group_info,
        with_placement_group_info: PlacementGroupInfo
    );
    value_accessors!(
        inference_accelerator_info,
        set_inference_accelerator_info,
        with_inference_accelerator_info: InferenceAcceleratorInfo
    );
    copy_accessors!(
        hibernation_supported,
        set_hibernation_supported,
        with_hibernation_supported: bool
    );
    copy_accessors!(
        burstable_performance_supported,
        set_burstable_performance_supported,
        with_burstable_performance_supported: bool
    );
    copy_accessors!(
        dedicated_hosts_supported,
        set_dedicated_hosts_supported,
        with_dedicated_hosts_supported: bool
    );
    copy_accessors!(
        auto_recovery_supported,
        set_auto_recovery_supported,
        with_auto_recovery_supported: bool
    );
}

impl fmt::Display for InstanceTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("InstanceType", &self.instance_type)
            .field("CurrentGeneration", &self.current_generation)
            .field("FreeTierEligible", &self.free_tier_eligible)
            .list("SupportedUsageClasses", &self.supported_usage_classes)
            .list("SupportedRootDeviceTypes", &self.supported_root_device_types)
            .list(
                "SupportedVirtualizationTypes",
                &self.supported_virtualization_types,
            )
            .field("BareMetal", &self.bare_metal)
            .field("Hypervisor", &self.hypervisor)
            .field("ProcessorInfo", &self.processor_info)
            .field("VCpuInfo", &self.v_cpu_info)
            .field("MemoryInfo", &self.memory_info)
            .field("InstanceStorageSupported", &self.instance_storage_supported)
            .field("InstanceStorageInfo", &self.instance_storage_info)
            .field("EbsInfo", &self.ebs_info)
            .field("NetworkInfo", &self.network_info)
            .field("GpuInfo", &self.gpu_info)
            .field("FpgaInfo", &self.fpga_info)
            .field("PlacementGroupInfo", &self.placement_group_info)
            .field("InferenceAcceleratorInfo", &self.inference_accelerator_info)
            .field("HibernationSupported", &self.hibernation_supported)
            .field(
                "BurstablePerformanceSupported",
                &self.burstable_performance_supported,
            )
            .field("DedicatedHostsSupported", &self.dedicated_hosts_supported)
            .field("AutoRecoverySupported", &self.auto_recovery_supported)
            .finish()
    }
}

// region: compute

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorInfo {
    supported_architectures: Option<Vec<ArchitectureValues>>,
    sustained_clock_speed_in_ghz: Option<f64>,
}

impl ProcessorInfo {
    list_accessors!(
        supported_architectures,
        set_supported_architectures,
        with_supported_architectures: ArchitectureValues
    );
    copy_accessors!(
        sustained_clock_speed_in_ghz,
        set_sustained_clock_speed_in_ghz,
        with_sustained_clock_speed_in_ghz: f64
    );
}

impl Hash for ProcessorInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.supported_architectures.hash(state);
        hash_float(self.sustained_clock_speed_in_ghz, state);
    }
}

impl fmt::Display for ProcessorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("SupportedArchitectures", &self.supported_architectures)
            .field("SustainedClockSpeedInGhz", &self.sustained_clock_speed_in_ghz)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VCpuInfo {
    default_v_cpus: Option<i32>,
    default_cores: Option<i32>,
    default_threads_per_core: Option<i32>,
    valid_cores: Option<Vec<i32>>,
    valid_threads_per_core: Option<Vec<i32>>,
}

impl VCpuInfo {
    copy_accessors!(default_v_cpus, set_default_v_cpus, with_default_v_cpus: i32);
    copy_accessors!(default_cores, set_default_cores, with_default_cores: i32);
    copy_accessors!(
        default_threads_per_core,
        set_default_threads_per_core,
        with_default_threads_per_core: i32
    );
    list_accessors!(
        /// Core counts accepted in `CpuOptions` at launch.
        valid_cores, set_valid_cores, with_valid_cores: i32
    );
    list_accessors!(
        valid_threads_per_core,
        set_valid_threads_per_core,
        with_valid_threads_per_core: i32
    );
}

impl fmt::Display for VCpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("DefaultVCpus", &self.default_v_cpus)
            .field("DefaultCores", &self.default_cores)
            .field("DefaultThreadsPerCore", &self.default_threads_per_core)
            .list("ValidCores", &self.valid_cores)
            .list("ValidThreadsPerCore", &self.valid_threads_per_core)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryInfo {
    size_in_mi_b: Option<i64>,
}

impl MemoryInfo {
    copy_accessors!(size_in_mi_b, set_size_in_mi_b, with_size_in_mi_b: i64);
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("SizeInMiB", &self.size_in_mi_b)
            .finish()
    }
}

// endregion: compute

// region: storage and network

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStorageInfo {
    #[serde(rename = "TotalSizeInGB")]
    total_size_in_gb: Option<i64>,
    disks: Option<Vec<DiskInfo>>,
}

impl InstanceStorageInfo {
    copy_accessors!(total_size_in_gb, set_total_size_in_gb, with_total_size_in_gb: i64);
    list_accessors!(disks, set_disks, with_disks: DiskInfo);
}

impl fmt::Display for InstanceStorageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("TotalSizeInGB", &self.total_size_in_gb)
            .list("Disks", &self.disks)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiskInfo {
    #[serde(rename = "SizeInGB")]
    size_in_gb: Option<i64>,
    count: Option<i32>,
    #[serde(rename = "Type")]
    disk_type: Option<DiskType>,
}

impl DiskInfo {
    copy_accessors!(size_in_gb, set_size_in_gb, with_size_in_gb: i64);
    copy_accessors!(count, set_count, with_count: i32);
    value_accessors!(disk_type, set_disk_type, with_disk_type: DiskType);
}

impl fmt::Display for DiskInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("SizeInGB", &self.size_in_gb)
            .field("Count", &self.count)
            .field("Type", &self.disk_type)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsInfo {
    ebs_optimized_support: Option<EbsOptimizedSupport>,
    encryption_support: Option<EbsEncryptionSupport>,
}

impl EbsInfo {
    value_accessors!(
        ebs_optimized_support,
        set_ebs_optimized_support,
        with_ebs_optimized_support: EbsOptimizedSupport
    );
    value_accessors!(
        encryption_support,
        set_encryption_support,
        with_encryption_support: EbsEncryptionSupport
    );
}

impl fmt::Display for EbsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("EbsOptimizedSupport", &self.ebs_optimized_support)
            .field("EncryptionSupport", &self.encryption_support)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInfo {
    network_performance: Option<String>,
    maximum_network_interfaces: Option<i32>,
    ipv4_addresses_per_interface: Option<i32>,
    ipv6_addresses_per_interface: Option<i32>,
    ipv6_supported: Option<bool>,
    ena_support: Option<String>,
}

impl NetworkInfo {
    value_accessors!(
        /// Free-form text such as `Up to 10 Gigabit`.
        network_performance, set_network_performance, with_network_performance: String
    );
    copy_accessors!(
        maximum_network_interfaces,
        set_maximum_network_interfaces,
        with_maximum_network_interfaces: i32
    );
    copy_accessors!(
        ipv4_addresses_per_interface,
        set_ipv4_addresses_per_interface,
        with_ipv4_addresses_per_interface: i32
    );
    copy_accessors!(
        ipv6_addresses_per_interface,
        set_ipv6_addresses_per_interface,
        with_ipv6_addresses_per_interface: i32
    );
    copy_accessors!(ipv6_supported, set_ipv6_supported, with_ipv6_supported: bool);
    value_accessors!(
        /// `unsupported`, `supported` or `required`.
        ena_support, set_ena_support, with_ena_support: String
    );
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("NetworkPerformance", &self.network_performance)
            .field("MaximumNetworkInterfaces", &self.maximum_network_interfaces)
            .field("Ipv4AddressesPerInterface", &self.ipv4_addresses_per_interface)
            .field("Ipv6AddressesPerInterface", &self.ipv6_addresses_per_interface)
            .field("Ipv6Supported", &self.ipv6_supported)
            .field("EnaSupport", &self.ena_support)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlacementGroupInfo {
    supported_strategies: Option<Vec<PlacementGroupStrategy>>,
}

impl PlacementGroupInfo {
    list_accessors!(
        supported_strategies,
        set_supported_strategies,
        with_supported_strategies: PlacementGroupStrategy
    );
}

impl fmt::Display for PlacementGroupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("SupportedStrategies", &self.supported_strategies)
            .finish()
    }
}

// endregion: storage and network

// region: accelerators

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GpuInfo {
    gpus: Option<Vec<AcceleratorDeviceInfo>>,
    total_gpu_memory_in_mi_b: Option<i32>,
}

impl GpuInfo {
    list_accessors!(gpus, set_gpus, with_gpus: AcceleratorDeviceInfo);
    copy_accessors!(
        total_gpu_memory_in_mi_b,
        set_total_gpu_memory_in_mi_b,
        with_total_gpu_memory_in_mi_b: i32
    );
}

impl fmt::Display for GpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Gpus", &self.gpus)
            .field("TotalGpuMemoryInMiB", &self.total_gpu_memory_in_mi_b)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FpgaInfo {
    fpgas: Option<Vec<AcceleratorDeviceInfo>>,
    total_fpga_memory_in_mi_b: Option<i32>,
}

impl FpgaInfo {
    list_accessors!(fpgas, set_fpgas, with_fpgas: AcceleratorDeviceInfo);
    copy_accessors!(
        total_fpga_memory_in_mi_b,
        set_total_fpga_memory_in_mi_b,
        with_total_fpga_memory_in_mi_b: i32
    );
}

impl fmt::Display for FpgaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Fpgas", &self.fpgas)
            .field("TotalFpgaMemoryInMiB", &self.total_fpga_memory_in_mi_b)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InferenceAcceleratorInfo {
    accelerators: Option<Vec<AcceleratorDeviceInfo>>,
}

impl InferenceAcceleratorInfo {
    list_accessors!(accelerators, set_accelerators, with_accelerators: AcceleratorDeviceInfo);
}

impl fmt::Display for InferenceAcceleratorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .list("Accelerators", &self.accelerators)
            .finish()
    }
}

/// A GPU, FPGA or inference accelerator fitted to an instance type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceleratorDeviceInfo {
    name: Option<String>,
    manufacturer: Option<String>,
    count: Option<i32>,
    memory_info: Option<MemoryInfo>,
}

impl AcceleratorDeviceInfo {
    value_accessors!(name, set_name, with_name: String);
    value_accessors!(manufacturer, set_manufacturer, with_manufacturer: String);
    copy_accessors!(count, set_count, with_count: i32);
    value_accessors!(
        /// Memory per device; absent for inference accelerators.
        memory_info, set_memory_info, with_memory_info: MemoryInfo
    );
}

impl fmt::Display for AcceleratorDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayFields::new(f)
            .field("Name", &self.name)
            .field("Manufacturer", &self.manufacturer)
            .field("Count", &self.count)
            .field("MemoryInfo", &self.memory_info)
            .finish()
    }
}

// endregion: accelerators

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_member_names() {
        let json = r#"{
            "InstanceType": "m5.large",
            "Hypervisor": "nitro",
            "VCpuInfo": {"DefaultVCpus": 2, "ValidCores": [1]},
            "MemoryInfo": {"SizeInMiB": 8192},
            "ProcessorInfo": {"SupportedArchitectures": ["x86_64"], "SustainedClockSpeedInGhz": 3.1},
            "InstanceStorageInfo": {"TotalSizeInGB": 75, "Disks": [{"SizeInGB": 75, "Count": 1, "Type": "ssd"}]},
            "SupportedUsageClasses": ["on-demand", "spot"]
        }"#;
        let info: InstanceTypeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.instance_type(), Some(&InstanceType::M5Large));
        assert_eq!(info.hypervisor(), Some(&InstanceTypeHypervisor::Nitro));
        assert_eq!(info.v_cpu_info().and_then(VCpuInfo::default_v_cpus), Some(2));
        assert_eq!(info.memory_info().and_then(MemoryInfo::size_in_mi_b), Some(8192));
        assert_eq!(
            info.processor_info()
                .and_then(ProcessorInfo::sustained_clock_speed_in_ghz),
            Some(3.1)
        );
        let storage = info.instance_storage_info().unwrap();
        assert_eq!(storage.total_size_in_gb(), Some(75));
        assert_eq!(storage.disks().unwrap()[0].disk_type(), Some(&DiskType::Ssd));
        assert_eq!(
            info.supported_usage_classes(),
            Some(&[UsageClassType::OnDemand, UsageClassType::Spot][..])
        );

        let back: InstanceTypeInfo =
            serde_json::from_value(serde_json::to_value(&info).unwrap()).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_display() {
        let info = InstanceTypeInfo::default()
            .with_instance_type(InstanceType::T3Micro)
            .with_free_tier_eligible(true)
            .with_memory_info(MemoryInfo::default().with_size_in_mi_b(1024));
        assert_eq!(
            info.to_string(),
            "{InstanceType: t3.micro, FreeTierEligible: true, MemoryInfo: {SizeInMiB: 1024}}"
        );
    }
}
