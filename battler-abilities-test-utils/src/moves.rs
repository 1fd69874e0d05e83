use battler_abilities::{
    common::{
        FastHashSet,
        Id,
    },
    data::{
        MoveCategory,
        MoveData,
        MoveFlag,
        MoveTarget,
        Type,
    },
};

/// Builds [`MoveData`] for tests.
pub struct TestMoveBuilder {
    move_data: MoveData,
}

impl TestMoveBuilder {
    pub fn new(name: &str, move_type: Type, category: MoveCategory) -> Self {
        Self {
            move_data: MoveData {
                id: Id::from(name),
                name: name.to_owned(),
                move_type,
                category,
                power: if category == MoveCategory::Status {
                    0
                } else {
                    80
                },
                priority: 0,
                target: MoveTarget::NearOther,
                flags: FastHashSet::default(),
            },
        }
    }

    /// A physical move that makes contact.
    pub fn contact(name: &str, move_type: Type) -> Self {
        Self::new(name, move_type, MoveCategory::Physical).with_flag(MoveFlag::Contact)
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.move_data.power = power;
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.move_data.priority = priority;
        self
    }

    pub fn with_target(mut self, target: MoveTarget) -> Self {
        self.move_data.target = target;
        self
    }

    pub fn with_flag(mut self, flag: MoveFlag) -> Self {
        self.move_data.flags.insert(flag);
        self
    }

    pub fn build(self) -> MoveData {
        self.move_data
    }
}
