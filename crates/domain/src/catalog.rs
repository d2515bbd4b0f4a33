use strum::{EnumIter, IntoEnumIterator};

pub const IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/yuhonas/free-exercise-db/main/exercises";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
}

impl MuscleGroup {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "胸部",
            MuscleGroup::Back => "背部",
            MuscleGroup::Legs => "腿部",
            MuscleGroup::Shoulders => "肩部",
            MuscleGroup::Arms => "手臂",
            MuscleGroup::Core => "核心",
            MuscleGroup::Cardio => "有氧",
        }
    }
}

/// Target muscle as highlighted on the muscle map.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum Muscle {
    Chest,
    Abs,
    Obliques,
    Quads,
    Calves,
    Biceps,
    Forearms,
    FrontDelts,
    Traps,
    Lats,
    LowerBack,
    Glutes,
    Hamstrings,
    Triceps,
    RearDelts,
}

impl Muscle {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Muscle::Chest => "chest",
            Muscle::Abs => "abs",
            Muscle::Obliques => "obliques",
            Muscle::Quads => "quads",
            Muscle::Calves => "calves",
            Muscle::Biceps => "biceps",
            Muscle::Forearms => "forearms",
            Muscle::FrontDelts => "front-delts",
            Muscle::Traps => "traps",
            Muscle::Lats => "lats",
            Muscle::LowerBack => "lower-back",
            Muscle::Glutes => "glutes",
            Muscle::Hamstrings => "hamstrings",
            Muscle::Triceps => "triceps",
            Muscle::RearDelts => "rear-delts",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Muscle::iter().find(|m| m.id() == id)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "初階",
            Difficulty::Intermediate => "中階",
            Difficulty::Advanced => "高階",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub description: &'static str,
    pub target_muscles: &'static [Muscle],
    pub primary_muscles: &'static [&'static str],
    pub difficulty: Difficulty,
    /// Never empty, the first variant is the default.
    pub variants: &'static [&'static str],
    /// Image paths relative to [`IMAGE_BASE_URL`].
    pub images: &'static [&'static str],
    pub variant_images: &'static [(&'static str, &'static [&'static str])],
}

impl Exercise {
    #[must_use]
    pub fn default_variant(&self) -> &'static str {
        self.variants[0]
    }

    #[must_use]
    pub fn has_variant(&self, variant: &str) -> bool {
        self.variants.contains(&variant)
    }

    /// Image URLs for the given variant, falling back to the default sequence.
    #[must_use]
    pub fn images(&self, variant: &str) -> Vec<String> {
        self.variant_images
            .iter()
            .find(|(v, _)| *v == variant)
            .map_or(self.images, |(_, images)| *images)
            .iter()
            .map(|path| format!("{IMAGE_BASE_URL}/{path}"))
            .collect()
    }
}

#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

/// Exercises of the given group in declaration order, or all exercises for `None`.
pub fn list_by_muscle_group(
    muscle_group: Option<MuscleGroup>,
) -> impl Iterator<Item = &'static Exercise> {
    EXERCISES
        .iter()
        .filter(move |e| muscle_group.is_none_or(|g| e.muscle_group == g))
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter)]
pub enum SystemPreset {
    AthleteBalance,
    FullBody,
    UpperBody,
    LowerBody,
}

impl SystemPreset {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SystemPreset::AthleteBalance => "運動員平衡",
            SystemPreset::FullBody => "全身燃脂",
            SystemPreset::UpperBody => "上肢雕塑",
            SystemPreset::LowerBody => "下肢強化",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            SystemPreset::AthleteBalance => "上下肢均衡發展，核心穩定。",
            SystemPreset::FullBody => "經典多關節動作組合。",
            SystemPreset::UpperBody => "針對胸背肩手訓練。",
            SystemPreset::LowerBody => "深蹲與硬舉，強壯地基。",
        }
    }
}

#[must_use]
pub fn preset_ids(preset: SystemPreset) -> &'static [&'static str] {
    match preset {
        SystemPreset::FullBody => &["legs-1", "chest-1", "back-2", "shoulders-1", "core-1"],
        SystemPreset::UpperBody => &["chest-2", "back-1", "shoulders-1", "arms-1", "arms-2"],
        SystemPreset::LowerBody => &["legs-1", "legs-3", "legs-2", "legs-4", "core-2"],
        SystemPreset::AthleteBalance => &["back-3", "legs-2", "shoulders-1", "back-1", "core-1"],
    }
}

static EXERCISES: [Exercise; 17] = [
    Exercise {
        id: "chest-1",
        name: "伏地挺身 Push-up",
        muscle_group: MuscleGroup::Chest,
        description: "經典的上肢推力動作，透過改變雙手距離與角度刺激不同部位。",
        target_muscles: &[Muscle::Chest, Muscle::FrontDelts, Muscle::Triceps, Muscle::Abs],
        primary_muscles: &["胸大肌", "前三角肌", "三頭肌"],
        difficulty: Difficulty::Beginner,
        variants: &[
            "標準 Standard",
            "跪姿 Kneeling",
            "寬距 Wide",
            "鑽石 (窄距) Diamond",
        ],
        images: &["Pushups/0.jpg", "Pushups/1.jpg"],
        variant_images: &[
            (
                "跪姿 Kneeling",
                &["Kneeling_Pushups/0.jpg", "Kneeling_Pushups/1.jpg"],
            ),
            (
                "寬距 Wide",
                &["Wide_Hands_Pushup/0.jpg", "Wide_Hands_Pushup/1.jpg"],
            ),
            (
                "鑽石 (窄距) Diamond",
                &["Diamond_Pushup/0.jpg", "Diamond_Pushup/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "chest-2",
        name: "臥推 Bench Press",
        muscle_group: MuscleGroup::Chest,
        description: "健身房王牌動作，能最大化發展上身推力與肌肉量。",
        target_muscles: &[Muscle::Chest, Muscle::FrontDelts, Muscle::Triceps],
        primary_muscles: &["胸大肌", "三頭肌"],
        difficulty: Difficulty::Intermediate,
        variants: &[
            "槓鈴平板 Barbell Flat",
            "啞鈴平板 Dumbbell Flat",
            "上斜啞鈴 Incline",
            "下斜啞鈴 Decline",
        ],
        images: &[
            "Barbell_Bench_Press_-_Medium_Grip/0.jpg",
            "Barbell_Bench_Press_-_Medium_Grip/1.jpg",
        ],
        variant_images: &[
            (
                "啞鈴平板 Dumbbell Flat",
                &["Dumbbell_Bench_Press/0.jpg", "Dumbbell_Bench_Press/1.jpg"],
            ),
            (
                "上斜啞鈴 Incline",
                &[
                    "Incline_Dumbbell_Bench_Press/0.jpg",
                    "Incline_Dumbbell_Bench_Press/1.jpg",
                ],
            ),
            (
                "下斜啞鈴 Decline",
                &[
                    "Decline_Dumbbell_Bench_Press/0.jpg",
                    "Decline_Dumbbell_Bench_Press/1.jpg",
                ],
            ),
        ],
    },
    Exercise {
        id: "chest-3",
        name: "飛鳥夾胸 Chest Fly",
        muscle_group: MuscleGroup::Chest,
        description: "孤立胸肌的動作，專注於肌肉的伸展與收縮感。",
        target_muscles: &[Muscle::Chest, Muscle::FrontDelts],
        primary_muscles: &["胸大肌 (內側)"],
        difficulty: Difficulty::Intermediate,
        variants: &["啞鈴飛鳥 Dumbbell", "繩索夾胸 Cable", "機械式夾胸 Machine"],
        images: &["Dumbbell_Flyes/0.jpg", "Dumbbell_Flyes/1.jpg"],
        variant_images: &[
            (
                "繩索夾胸 Cable",
                &["Cable_Crossover/0.jpg", "Cable_Crossover/1.jpg"],
            ),
            ("機械式夾胸 Machine", &["Butterfly/0.jpg", "Butterfly/1.jpg"]),
        ],
    },
    Exercise {
        id: "back-1",
        name: "引體向上 Pull-up",
        muscle_group: MuscleGroup::Back,
        description: "垂直拉力動作，打造倒三角體型的關鍵。",
        target_muscles: &[Muscle::Lats, Muscle::Biceps, Muscle::Traps, Muscle::Forearms],
        primary_muscles: &["闊背肌", "二頭肌", "圓肌"],
        difficulty: Difficulty::Advanced,
        variants: &["正手 Pull-up", "反手 Chin-up", "機械下拉 Lat Pulldown"],
        images: &["Pullups/0.jpg", "Pullups/1.jpg"],
        variant_images: &[
            ("反手 Chin-up", &["Chinups/0.jpg", "Chinups/1.jpg"]),
            (
                "機械下拉 Lat Pulldown",
                &["Cable_Pulldown/0.jpg", "Cable_Pulldown/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "back-2",
        name: "俯身划船 Barbell Row",
        muscle_group: MuscleGroup::Back,
        description: "水平拉力動作，增加背部厚度與改善圓肩。",
        target_muscles: &[
            Muscle::Lats,
            Muscle::Traps,
            Muscle::RearDelts,
            Muscle::Biceps,
            Muscle::LowerBack,
        ],
        primary_muscles: &["闊背肌", "斜方肌", "菱形肌"],
        difficulty: Difficulty::Intermediate,
        variants: &[
            "槓鈴俯身 Barbell Bent-over",
            "單手啞鈴 Dumbbell",
            "反向划船 Inverted",
        ],
        images: &["Bent_Over_Barbell_Row/0.jpg", "Bent_Over_Barbell_Row/1.jpg"],
        variant_images: &[
            ("單手啞鈴 Dumbbell", &["Dumbbell_Row/0.jpg", "Dumbbell_Row/1.jpg"]),
            ("反向划船 Inverted", &["Inverted_Row/0.jpg", "Inverted_Row/1.jpg"]),
        ],
    },
    Exercise {
        id: "back-3",
        name: "硬舉 Deadlift",
        muscle_group: MuscleGroup::Back,
        description: "全身性力量動作，強化後側鏈條，提升整體力量。",
        target_muscles: &[
            Muscle::LowerBack,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::Traps,
            Muscle::Forearms,
            Muscle::Quads,
        ],
        primary_muscles: &["豎脊肌", "臀大肌", "腿後側"],
        difficulty: Difficulty::Advanced,
        variants: &["傳統槓鈴 Conventional", "羅馬尼亞 RDL", "相撲 Sumo"],
        images: &["Barbell_Deadlift/0.jpg", "Barbell_Deadlift/1.jpg"],
        variant_images: &[
            (
                "羅馬尼亞 RDL",
                &["Romanian_Deadlift/0.jpg", "Romanian_Deadlift/1.jpg"],
            ),
            ("相撲 Sumo", &["Sumo_Deadlift/0.jpg", "Sumo_Deadlift/1.jpg"]),
        ],
    },
    Exercise {
        id: "legs-1",
        name: "深蹲 Squat",
        muscle_group: MuscleGroup::Legs,
        description: "動作之王。訓練下肢力量、爆發力與核心穩定的最佳選擇。",
        target_muscles: &[
            Muscle::Quads,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::LowerBack,
            Muscle::Abs,
        ],
        primary_muscles: &["股四頭肌", "臀大肌", "內收肌"],
        difficulty: Difficulty::Intermediate,
        variants: &[
            "徒手 Bodyweight",
            "槓鈴頸後 Back Squat",
            "高腳杯 Goblet",
            "前蹲舉 Front Squat",
        ],
        images: &["Barbell_Squat/0.jpg", "Barbell_Squat/1.jpg"],
        variant_images: &[
            ("徒手 Bodyweight", &["Air_Squat/0.jpg", "Air_Squat/1.jpg"]),
            ("高腳杯 Goblet", &["Goblet_Squat/0.jpg", "Goblet_Squat/1.jpg"]),
            ("前蹲舉 Front Squat", &["Front_Squat/0.jpg", "Front_Squat/1.jpg"]),
        ],
    },
    Exercise {
        id: "legs-2",
        name: "弓箭步 Lunge",
        muscle_group: MuscleGroup::Legs,
        description: "單腳功能性訓練，改善左右肌力不均與平衡感。",
        target_muscles: &[Muscle::Quads, Muscle::Glutes, Muscle::Hamstrings, Muscle::Calves],
        primary_muscles: &["股四頭肌", "臀大肌"],
        difficulty: Difficulty::Intermediate,
        variants: &[
            "啞鈴前行 Walking",
            "原地啞鈴 Dumbbell",
            "保加利亞分腿蹲 Bulgarian Split",
        ],
        images: &["Dumbbell_Lunges/0.jpg", "Dumbbell_Lunges/1.jpg"],
        variant_images: &[
            (
                "啞鈴前行 Walking",
                &["Dumbbell_Lunges/0.jpg", "Dumbbell_Lunges/1.jpg"],
            ),
            (
                "保加利亞分腿蹲 Bulgarian Split",
                &["Split_Squat/0.jpg", "Split_Squat/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "legs-3",
        name: "腿推舉 Leg Press",
        muscle_group: MuscleGroup::Legs,
        description: "機械式輔助訓練，能安全地對腿部肌群施加高強度負荷。",
        target_muscles: &[Muscle::Quads, Muscle::Hamstrings],
        primary_muscles: &["股四頭肌", "腿後側"],
        difficulty: Difficulty::Beginner,
        variants: &[
            "機械腿推 Leg Press",
            "坐姿腿屈伸 Leg Extension",
            "趴姿腿後勾 Leg Curl",
        ],
        images: &["Leg_Press/0.jpg", "Leg_Press/1.jpg"],
        variant_images: &[
            (
                "坐姿腿屈伸 Leg Extension",
                &["Leg_Extensions/0.jpg", "Leg_Extensions/1.jpg"],
            ),
            (
                "趴姿腿後勾 Leg Curl",
                &["Lying_Leg_Curls/0.jpg", "Lying_Leg_Curls/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "legs-4",
        name: "提踵 Calf Raise",
        muscle_group: MuscleGroup::Legs,
        description: "針對小腿肌群的訓練，增加腳踝穩定性與爆發力。",
        target_muscles: &[Muscle::Calves],
        primary_muscles: &["腓腸肌", "比目魚肌"],
        difficulty: Difficulty::Beginner,
        variants: &["啞鈴負重 Weighted", "徒手 Standing", "坐姿機械 Seated"],
        images: &["Dumbbell_Calf_Raise/0.jpg", "Dumbbell_Calf_Raise/1.jpg"],
        variant_images: &[
            (
                "徒手 Standing",
                &["Standing_Calf_Raises/0.jpg", "Standing_Calf_Raises/1.jpg"],
            ),
            (
                "坐姿機械 Seated",
                &["Seated_Calf_Raise/0.jpg", "Seated_Calf_Raise/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "shoulders-1",
        name: "肩推 Shoulder Press",
        muscle_group: MuscleGroup::Shoulders,
        description: "垂直推力動作，打造飽滿的肩膀線條。",
        target_muscles: &[Muscle::FrontDelts, Muscle::Triceps, Muscle::Traps],
        primary_muscles: &["前三角肌", "中三角肌", "三頭肌"],
        difficulty: Difficulty::Intermediate,
        variants: &["站姿槓鈴 Barbell", "坐姿啞鈴 Dumbbell", "阿諾推舉 Arnold"],
        images: &["Barbell_Shoulder_Press/0.jpg", "Barbell_Shoulder_Press/1.jpg"],
        variant_images: &[
            (
                "坐姿啞鈴 Dumbbell",
                &[
                    "Seated_Dumbbell_Shoulder_Press/0.jpg",
                    "Seated_Dumbbell_Shoulder_Press/1.jpg",
                ],
            ),
            ("阿諾推舉 Arnold", &["Arnold_Press/0.jpg", "Arnold_Press/1.jpg"]),
        ],
    },
    Exercise {
        id: "shoulders-2",
        name: "側平舉 Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        description: "孤立中束三角肌，讓肩膀看起來更寬的關鍵動作。",
        target_muscles: &[Muscle::FrontDelts, Muscle::RearDelts],
        primary_muscles: &["中三角肌"],
        difficulty: Difficulty::Beginner,
        variants: &["啞鈴 Dumbbell", "繩索 Cable"],
        images: &["Side_Lateral_Raise/0.jpg", "Side_Lateral_Raise/1.jpg"],
        variant_images: &[(
            "繩索 Cable",
            &["Cable_Lateral_Raise/0.jpg", "Cable_Lateral_Raise/1.jpg"],
        )],
    },
    Exercise {
        id: "arms-1",
        name: "二頭彎舉 Bicep Curl",
        muscle_group: MuscleGroup::Arms,
        description: "手臂屈曲動作，增加上臂圍度。",
        target_muscles: &[Muscle::Biceps, Muscle::Forearms],
        primary_muscles: &["肱二頭肌"],
        difficulty: Difficulty::Beginner,
        variants: &[
            "槓鈴 Barbell",
            "啞鈴 Dumbbell",
            "集中彎舉 Concentration",
            "錘式 Hammer",
        ],
        images: &["Barbell_Curl/0.jpg", "Barbell_Curl/1.jpg"],
        variant_images: &[
            (
                "啞鈴 Dumbbell",
                &["Dumbbell_Bicep_Curl/0.jpg", "Dumbbell_Bicep_Curl/1.jpg"],
            ),
            ("錘式 Hammer", &["Hammer_Curls/0.jpg", "Hammer_Curls/1.jpg"]),
            (
                "集中彎舉 Concentration",
                &["Concentration_Curls/0.jpg", "Concentration_Curls/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "arms-2",
        name: "三頭伸展 Tricep Ext",
        muscle_group: MuscleGroup::Arms,
        description: "手臂伸展動作，消除掰掰袖，增加推力。",
        target_muscles: &[Muscle::Triceps],
        primary_muscles: &["肱三頭肌"],
        difficulty: Difficulty::Beginner,
        variants: &[
            "繩索下壓 Cable Pushdown",
            "啞鈴頸後 Overhead",
            "板凳臂屈伸 Dips",
        ],
        images: &["Pushdowns/0.jpg", "Pushdowns/1.jpg"],
        variant_images: &[
            ("板凳臂屈伸 Dips", &["Bench_Dips/0.jpg", "Bench_Dips/1.jpg"]),
            (
                "啞鈴頸後 Overhead",
                &["Seated_Triceps_Press/0.jpg", "Seated_Triceps_Press/1.jpg"],
            ),
        ],
    },
    Exercise {
        id: "core-1",
        name: "平板支撐 Plank",
        muscle_group: MuscleGroup::Core,
        description: "等長收縮訓練，建立深層核心穩定性。",
        target_muscles: &[Muscle::Abs, Muscle::Obliques, Muscle::FrontDelts],
        primary_muscles: &["腹橫肌", "腹直肌"],
        difficulty: Difficulty::Beginner,
        variants: &["標準 Standard", "側向 Side Plank"],
        images: &["Plank/0.jpg", "Plank/1.jpg"],
        variant_images: &[("側向 Side Plank", &["Side_Plank/0.jpg", "Side_Plank/1.jpg"])],
    },
    Exercise {
        id: "core-2",
        name: "捲腹 Crunch",
        muscle_group: MuscleGroup::Core,
        description: "針對腹直肌的收縮訓練，打造六塊肌線條。",
        target_muscles: &[Muscle::Abs],
        primary_muscles: &["腹直肌"],
        difficulty: Difficulty::Beginner,
        variants: &["徒手捲腹 Crunch", "懸垂抬腿 Hanging Leg Raise"],
        images: &["Crunches/0.jpg", "Crunches/1.jpg"],
        variant_images: &[(
            "懸垂抬腿 Hanging Leg Raise",
            &["Hanging_Leg_Raise/0.jpg", "Hanging_Leg_Raise/1.jpg"],
        )],
    },
    Exercise {
        id: "cardio-1",
        name: "波比跳 Burpees",
        muscle_group: MuscleGroup::Cardio,
        description: "短時間高強度的全身爆發，快速燃脂。",
        target_muscles: &[
            Muscle::Quads,
            Muscle::Calves,
            Muscle::Abs,
            Muscle::Chest,
            Muscle::Lats,
        ],
        primary_muscles: &["心肺", "全身肌群"],
        difficulty: Difficulty::Intermediate,
        variants: &[
            "波比跳 Burpees",
            "開合跳 Jumping Jacks",
            "登山者 Mountain Climber",
        ],
        images: &["Burpees/0.jpg", "Burpees/1.jpg"],
        variant_images: &[
            (
                "開合跳 Jumping Jacks",
                &["Jumping_Jacks/0.jpg", "Jumping_Jacks/1.jpg"],
            ),
            (
                "登山者 Mountain Climber",
                &["Mountain_Climbers/0.jpg", "Mountain_Climbers/1.jpg"],
            ),
        ],
    },
];
