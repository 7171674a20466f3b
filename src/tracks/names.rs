use std::borrow::Cow;
use std::collections::BTreeMap;

const COCO: [&str; 80] = [
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "backpack",
    "umbrella",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// Lookup table from detector class index to a display label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNames {
    names: BTreeMap<u32, String>,
}

impl ClassNames {
    /// Build a table from `(class_id, name)` pairs.
    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, N)>,
        N: Into<String>,
    {
        Self {
            names: pairs.into_iter().map(|(id, n)| (id, n.into())).collect(),
        }
    }

    /// The 80 COCO labels, as used by most off-the-shelf detectors.
    pub fn coco() -> Self {
        COCO.into_iter().collect()
    }

    /// Label for `class_id`. Unknown ids fall back to the id itself.
    pub fn name_of(&self, class_id: u32) -> Cow<'_, str> {
        match self.names.get(&class_id) {
            Some(name) => Cow::Borrowed(name),
            None => {
                log::debug!("no label for class {class_id}, using the id");
                Cow::Owned(class_id.to_string())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<String>> FromIterator<N> for ClassNames {
    /// Names in class-index order: the first name is class 0.
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::from_pairs((0u32..).zip(iter))
    }
}
