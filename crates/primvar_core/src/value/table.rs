/// Invoke `$callback!` with the full registered type universe.
///
/// Each entry reads `Variant(RustType) = id, "name", components => UnderlyingVariant(UnderlyingRustType);`.
/// Plain types name themselves as underlying; role types name the tuple whose layout they share.
macro_rules! for_each_value_type {
	($callback:ident) => {
		$callback! {
			Token(Token) = 1, "token", 1 => Token(Token);
			String(String) = 2, "string", 1 => String(String);
			Bool(bool) = 3, "bool", 1 => Bool(bool);
			Half(Half) = 4, "half", 1 => Half(Half);
			Int(i32) = 5, "int", 1 => Int(i32);
			Int64(i64) = 6, "int64", 1 => Int64(i64);
			Half2(Half2) = 7, "half2", 2 => Half2(Half2);
			Half3(Half3) = 8, "half3", 3 => Half3(Half3);
			Half4(Half4) = 9, "half4", 4 => Half4(Half4);
			Int2(Int2) = 10, "int2", 2 => Int2(Int2);
			Int3(Int3) = 11, "int3", 3 => Int3(Int3);
			Int4(Int4) = 12, "int4", 4 => Int4(Int4);
			Uchar(u8) = 13, "uchar", 1 => Uchar(u8);
			Uint(u32) = 14, "uint", 1 => Uint(u32);
			Uint64(u64) = 15, "uint64", 1 => Uint64(u64);
			Uint2(Uint2) = 16, "uint2", 2 => Uint2(Uint2);
			Uint3(Uint3) = 17, "uint3", 3 => Uint3(Uint3);
			Uint4(Uint4) = 18, "uint4", 4 => Uint4(Uint4);
			Float(f32) = 19, "float", 1 => Float(f32);
			Float2(Float2) = 20, "float2", 2 => Float2(Float2);
			Float3(Float3) = 21, "float3", 3 => Float3(Float3);
			Float4(Float4) = 22, "float4", 4 => Float4(Float4);
			Double(f64) = 23, "double", 1 => Double(f64);
			Double2(Double2) = 24, "double2", 2 => Double2(Double2);
			Double3(Double3) = 25, "double3", 3 => Double3(Double3);
			Double4(Double4) = 26, "double4", 4 => Double4(Double4);
			Quath(Quath) = 27, "quath", 4 => Quath(Quath);
			Quatf(Quatf) = 28, "quatf", 4 => Quatf(Quatf);
			Quatd(Quatd) = 29, "quatd", 4 => Quatd(Quatd);
			Matrix2d(Matrix2d) = 30, "matrix2d", 4 => Matrix2d(Matrix2d);
			Matrix3d(Matrix3d) = 31, "matrix3d", 9 => Matrix3d(Matrix3d);
			Matrix4d(Matrix4d) = 32, "matrix4d", 16 => Matrix4d(Matrix4d);
			Color3h(Color3h) = 33, "color3h", 3 => Half3(Half3);
			Color3f(Color3f) = 34, "color3f", 3 => Float3(Float3);
			Color3d(Color3d) = 35, "color3d", 3 => Double3(Double3);
			Color4h(Color4h) = 36, "color4h", 4 => Half4(Half4);
			Color4f(Color4f) = 37, "color4f", 4 => Float4(Float4);
			Color4d(Color4d) = 38, "color4d", 4 => Double4(Double4);
			Point3h(Point3h) = 39, "point3h", 3 => Half3(Half3);
			Point3f(Point3f) = 40, "point3f", 3 => Float3(Float3);
			Point3d(Point3d) = 41, "point3d", 3 => Double3(Double3);
			Normal3h(Normal3h) = 42, "normal3h", 3 => Half3(Half3);
			Normal3f(Normal3f) = 43, "normal3f", 3 => Float3(Float3);
			Normal3d(Normal3d) = 44, "normal3d", 3 => Double3(Double3);
			Vector3h(Vector3h) = 45, "vector3h", 3 => Half3(Half3);
			Vector3f(Vector3f) = 46, "vector3f", 3 => Float3(Float3);
			Vector3d(Vector3d) = 47, "vector3d", 3 => Double3(Double3);
			Frame4d(Frame4d) = 48, "frame4d", 16 => Matrix4d(Matrix4d);
			Texcoord2h(Texcoord2h) = 49, "texcoord2h", 2 => Half2(Half2);
			Texcoord2f(Texcoord2f) = 50, "texcoord2f", 2 => Float2(Float2);
			Texcoord2d(Texcoord2d) = 51, "texcoord2d", 2 => Double2(Double2);
			Texcoord3h(Texcoord3h) = 52, "texcoord3h", 3 => Half3(Half3);
			Texcoord3f(Texcoord3f) = 53, "texcoord3f", 3 => Float3(Float3);
			Texcoord3d(Texcoord3d) = 54, "texcoord3d", 3 => Double3(Double3);
			Dictionary(Dictionary) = 55, "dictionary", 1 => Dictionary(Dictionary);
		}
	};
}
