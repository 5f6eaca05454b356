macro_rules! data_elements_enum {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $tag:literal => $field:ident, $presence:ident),* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = $crate::aamva::dlid::data_elements_enum!(@count $($id,)*);

			/// Every element, in subfile order.
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			pub fn from_id(id: &[u8; 3]) -> Option<Self> {
				match id {
					$($tag => Some(Self::$id),)*
					_ => None
				}
			}

			pub fn id(&self) -> &'static [u8; 3] {
				match self {
					$(Self::$id => $tag),*
				}
			}

			/// Form field holding the element value.
			pub fn field(&self) -> $crate::aamva::FieldId {
				match self {
					$(Self::$id => $crate::aamva::FieldId::$field),*
				}
			}

			pub fn presence(&self) -> $crate::aamva::dlid::Presence {
				match self {
					$(Self::$id => $crate::aamva::dlid::Presence::$presence),*
				}
			}

			pub fn is_mandatory(&self) -> bool {
				self.presence() == $crate::aamva::dlid::Presence::Mandatory
			}
		}

		impl $enum_id {
			pub fn string_id(&self) -> &'static str {
				unsafe { std::str::from_utf8_unchecked(self.id()) }
			}
		}

		impl std::fmt::Display for $enum_id {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.string_id())
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + $crate::aamva::dlid::data_elements_enum!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	}
}

pub(crate) use data_elements_enum;
