use once_cell::sync::Lazy;

use super::{
    DeviceAndAppManagementAssignmentFilterType, DeviceAndAppManagementAssignmentSource,
    DeviceConfigAssignmentIntent, Entity,
};
use crate::serialization::{
    AdditionalData, DiscriminatorRegistry, FieldTable, JsonParseNode, Schema,
};
use crate::GraphResult;

/// Assignment of a device configuration profile to a target.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfigurationAssignment {
    pub entity: Entity,

    /// The admin intent to apply or remove the profile.
    pub intent: Option<DeviceConfigAssignmentIntent>,

    /// The assignment source for the device configuration, direct or
    /// parcel/policySet.
    pub source: Option<DeviceAndAppManagementAssignmentSource>,

    /// The identifier of the source of the assignment.
    pub source_id: Option<String>,

    /// The assignment target for the device configuration.
    pub target: Option<AssignmentTargetKind>,
}

static ASSIGNMENT_FIELDS: Lazy<FieldTable<DeviceConfigurationAssignment>> = Lazy::new(|| {
    FieldTable::<DeviceConfigurationAssignment>::builder()
        .inherit(Entity::fields(), |m| &m.entity, |m| &mut m.entity)
        .enumeration("intent", |m| &m.intent, |m| &mut m.intent)
        .enumeration("source", |m| &m.source, |m| &mut m.source)
        .primitive("sourceId", |m| &m.source_id, |m| &mut m.source_id)
        .object(
            "target",
            AssignmentTargetKind::create_from_discriminator_value,
            |m| &m.target,
            |m| &mut m.target,
        )
        .build()
});

impl Schema for DeviceConfigurationAssignment {
    fn fields() -> &'static FieldTable<Self> {
        &ASSIGNMENT_FIELDS
    }
}

impl DeviceConfigurationAssignment {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceConfigurationAssignment";

    pub fn new() -> Self {
        Self {
            entity: Entity::tagged(Self::ODATA_TYPE),
            intent: None,
            source: None,
            source_id: None,
            target: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> GraphResult<Self> {
        Ok(Self::new())
    }
}

impl Default for DeviceConfigurationAssignment {
    fn default() -> Self {
        Self::new()
    }
}

/// Base type for assignment targets. Abstract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceAndAppManagementAssignmentTarget {
    pub additional_data: AdditionalData,

    /// The Id of the filter for the target assignment.
    pub device_and_app_management_assignment_filter_id: Option<String>,

    /// The type of filter of the target assignment i.e. Exclude or Include.
    pub device_and_app_management_assignment_filter_type:
        Option<DeviceAndAppManagementAssignmentFilterType>,

    pub odata_type: Option<String>,
}

static TARGET_FIELDS: Lazy<FieldTable<DeviceAndAppManagementAssignmentTarget>> =
    Lazy::new(|| {
        FieldTable::<DeviceAndAppManagementAssignmentTarget>::builder()
            .additional_data(|m| &m.additional_data, |m| &mut m.additional_data)
            .primitive(
                "deviceAndAppManagementAssignmentFilterId",
                |m| &m.device_and_app_management_assignment_filter_id,
                |m| &mut m.device_and_app_management_assignment_filter_id,
            )
            .enumeration(
                "deviceAndAppManagementAssignmentFilterType",
                |m| &m.device_and_app_management_assignment_filter_type,
                |m| &mut m.device_and_app_management_assignment_filter_type,
            )
            .primitive("@odata.type", |m| &m.odata_type, |m| &mut m.odata_type)
            .build()
    });

impl Schema for DeviceAndAppManagementAssignmentTarget {
    fn fields() -> &'static FieldTable<Self> {
        &TARGET_FIELDS
    }
}

impl DeviceAndAppManagementAssignmentTarget {
    pub fn new() -> Self {
        Self::default()
    }

    fn tagged(odata_type: &str) -> Self {
        Self {
            odata_type: Some(odata_type.to_string()),
            ..Self::default()
        }
    }
}

/// Targets every device.
#[derive(Debug, Clone, PartialEq)]
pub struct AllDevicesAssignmentTarget {
    pub target: DeviceAndAppManagementAssignmentTarget,
}

static ALL_DEVICES_FIELDS: Lazy<FieldTable<AllDevicesAssignmentTarget>> = Lazy::new(|| {
    FieldTable::<AllDevicesAssignmentTarget>::builder()
        .inherit(
            DeviceAndAppManagementAssignmentTarget::fields(),
            |m| &m.target,
            |m| &mut m.target,
        )
        .build()
});

impl Schema for AllDevicesAssignmentTarget {
    fn fields() -> &'static FieldTable<Self> {
        &ALL_DEVICES_FIELDS
    }
}

impl AllDevicesAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.allDevicesAssignmentTarget";

    pub fn new() -> Self {
        Self {
            target: DeviceAndAppManagementAssignmentTarget::tagged(Self::ODATA_TYPE),
        }
    }
}

impl Default for AllDevicesAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

/// Targets every licensed user.
#[derive(Debug, Clone, PartialEq)]
pub struct AllLicensedUsersAssignmentTarget {
    pub target: DeviceAndAppManagementAssignmentTarget,
}

static ALL_LICENSED_USERS_FIELDS: Lazy<FieldTable<AllLicensedUsersAssignmentTarget>> =
    Lazy::new(|| {
        FieldTable::<AllLicensedUsersAssignmentTarget>::builder()
            .inherit(
                DeviceAndAppManagementAssignmentTarget::fields(),
                |m| &m.target,
                |m| &mut m.target,
            )
            .build()
    });

impl Schema for AllLicensedUsersAssignmentTarget {
    fn fields() -> &'static FieldTable<Self> {
        &ALL_LICENSED_USERS_FIELDS
    }
}

impl AllLicensedUsersAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.allLicensedUsersAssignmentTarget";

    pub fn new() -> Self {
        Self {
            target: DeviceAndAppManagementAssignmentTarget::tagged(Self::ODATA_TYPE),
        }
    }
}

impl Default for AllLicensedUsersAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

/// Targets the members of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAssignmentTarget {
    pub target: DeviceAndAppManagementAssignmentTarget,

    /// The group Id that is the target of the assignment.
    pub group_id: Option<String>,
}

static GROUP_FIELDS: Lazy<FieldTable<GroupAssignmentTarget>> = Lazy::new(|| {
    FieldTable::<GroupAssignmentTarget>::builder()
        .inherit(
            DeviceAndAppManagementAssignmentTarget::fields(),
            |m| &m.target,
            |m| &mut m.target,
        )
        .primitive("groupId", |m| &m.group_id, |m| &mut m.group_id)
        .build()
});

impl Schema for GroupAssignmentTarget {
    fn fields() -> &'static FieldTable<Self> {
        &GROUP_FIELDS
    }
}

impl GroupAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.groupAssignmentTarget";

    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    fn tagged(odata_type: &str) -> Self {
        Self {
            target: DeviceAndAppManagementAssignmentTarget::tagged(odata_type),
            group_id: None,
        }
    }
}

impl Default for GroupAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

/// Excludes the members of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionGroupAssignmentTarget {
    pub group: GroupAssignmentTarget,
}

static EXCLUSION_GROUP_FIELDS: Lazy<FieldTable<ExclusionGroupAssignmentTarget>> =
    Lazy::new(|| {
        FieldTable::<ExclusionGroupAssignmentTarget>::builder()
            .inherit(GroupAssignmentTarget::fields(), |m| &m.group, |m| &mut m.group)
            .build()
    });

impl Schema for ExclusionGroupAssignmentTarget {
    fn fields() -> &'static FieldTable<Self> {
        &EXCLUSION_GROUP_FIELDS
    }
}

impl ExclusionGroupAssignmentTarget {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.exclusionGroupAssignmentTarget";

    pub fn new() -> Self {
        Self {
            group: GroupAssignmentTarget::tagged(Self::ODATA_TYPE),
        }
    }
}

impl Default for ExclusionGroupAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}

polymorphic! {
    /// Any assignment target, resolved from `@odata.type`.
    pub enum AssignmentTargetKind {
        Base(DeviceAndAppManagementAssignmentTarget),
        AllDevices(AllDevicesAssignmentTarget),
        AllLicensedUsers(AllLicensedUsersAssignmentTarget),
        Group(GroupAssignmentTarget),
        ExclusionGroup(ExclusionGroupAssignmentTarget),
    }
}

static ASSIGNMENT_TARGET_TYPES: Lazy<DiscriminatorRegistry<AssignmentTargetKind>> =
    Lazy::new(|| {
        DiscriminatorRegistry::<AssignmentTargetKind>::new(
            "deviceAndAppManagementAssignmentTarget",
            || DeviceAndAppManagementAssignmentTarget::new().into(),
        )
        .register(AllDevicesAssignmentTarget::ODATA_TYPE, || AllDevicesAssignmentTarget::new().into())
        .register(AllLicensedUsersAssignmentTarget::ODATA_TYPE, || {
            AllLicensedUsersAssignmentTarget::new().into()
        })
        .register(GroupAssignmentTarget::ODATA_TYPE, || GroupAssignmentTarget::new().into())
        .register(ExclusionGroupAssignmentTarget::ODATA_TYPE, || {
            ExclusionGroupAssignmentTarget::new().into()
        })
    });

impl AssignmentTargetKind {
    pub fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> GraphResult<Self> {
        ASSIGNMENT_TARGET_TYPES.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &ASSIGNMENT_TARGET_TYPES
    }

    /// The fields every assignment target carries.
    pub fn target(&self) -> &DeviceAndAppManagementAssignmentTarget {
        match self {
            Self::Base(t) => t,
            Self::AllDevices(t) => &t.target,
            Self::AllLicensedUsers(t) => &t.target,
            Self::Group(t) => &t.target,
            Self::ExclusionGroup(t) => &t.group.target,
        }
    }

    pub fn target_mut(&mut self) -> &mut DeviceAndAppManagementAssignmentTarget {
        match self {
            Self::Base(t) => t,
            Self::AllDevices(t) => &mut t.target,
            Self::AllLicensedUsers(t) => &mut t.target,
            Self::Group(t) => &mut t.target,
            Self::ExclusionGroup(t) => &mut t.group.target,
        }
    }

    /// The targeted group, for group and exclusion-group targets.
    pub fn group_id(&self) -> Option<&str> {
        match self {
            Self::Group(t) => t.group_id.as_deref(),
            Self::ExclusionGroup(t) => t.group.group_id.as_deref(),
            _ => None,
        }
    }
}
